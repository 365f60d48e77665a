//! An oriented rectangle: center, orientation, width, height; the four
//! corners are cached.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{Real, lerp};
use crate::primitives::slab_intersects;
use crate::shapes::Ray;
use crate::traits::{Bounded, Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    center: Point2<Real>,
    orientation: UnitComplex<Real>,
    width: Real,
    height: Real,
    corners: [Point2<Real>; 4],
}

impl Rectangle {
    /// Create a rectangle. Fails if `width` or `height` is negative.
    pub fn new(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        width: Real,
        height: Real,
    ) -> Result<Self, ValidationError> {
        if width < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "width",
                value: width,
            });
        }
        if height < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "height",
                value: height,
            });
        }
        Ok(Self::rebuild(center, orientation, width, height))
    }

    /// Replace every parameter at once, re-validating.
    pub fn set(
        &mut self,
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        width: Real,
        height: Real,
    ) -> Result<(), ValidationError> {
        *self = Self::new(center, orientation, width, height)?;
        Ok(())
    }

    fn rebuild(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        width: Real,
        height: Real,
    ) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let local = [
            Vector2::new(hw, hh),
            Vector2::new(-hw, hh),
            Vector2::new(-hw, -hh),
            Vector2::new(hw, -hh),
        ];
        Self {
            center,
            orientation,
            width,
            height,
            corners: local.map(|v| center + orientation * v),
        }
    }

    pub const fn center(&self) -> Point2<Real> {
        self.center
    }

    pub const fn orientation(&self) -> UnitComplex<Real> {
        self.orientation
    }

    pub const fn width(&self) -> Real {
        self.width
    }

    pub const fn height(&self) -> Real {
        self.height
    }

    pub fn area(&self) -> Real {
        self.width * self.height
    }

    pub fn perimeter(&self) -> Real {
        2.0 * (self.width + self.height)
    }

    /// Fresh iterator over the corners, counter-clockwise from the
    /// upper-right (a snapshot, not a live view).
    pub fn points(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.corners.iter().copied()
    }

    fn to_local(&self, point: Point2<Real>) -> Vector2<Real> {
        self.orientation.inverse() * (point - self.center)
    }

    fn from_local(&self, local: Vector2<Real>) -> Point2<Real> {
        self.center + self.orientation * local
    }
}

impl Spatial for Rectangle {
    fn center(&self) -> Point2<Real> {
        self.center
    }

    fn orientation(&self) -> UnitComplex<Real> {
        self.orientation
    }

    fn with_pose(
        &self,
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        size_scale: Real,
    ) -> Self {
        Self::rebuild(
            center,
            orientation,
            self.width * size_scale,
            self.height * size_scale,
        )
    }
}

impl Shape2d for Rectangle {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        let local = self.to_local(point);
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let clamped = Vector2::new(local.x.clamp(-hw, hw), local.y.clamp(-hh, hh));
        if clamped == local {
            point
        } else {
            self.from_local(clamped)
        }
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        let local = self.to_local(point);
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.height / 2.0
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        let origin = Point2::from(self.to_local(ray.origin()));
        let dir = self.orientation.inverse() * ray.direction();
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        slab_intersects(origin, &dir, Point2::new(-hw, -hh), Point2::new(hw, hh))
    }
}

impl Interpolate for Rectangle {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        Self::rebuild(
            self.center + (other.center - self.center) * t,
            self.orientation.slerp(&other.orientation, t),
            lerp(self.width, other.width, t),
            lerp(self.height, other.height, t),
        )
    }
}

impl Bounded for Rectangle {
    fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.corners)
    }
}
