//! A line segment, stored as center + orientation + length so it transforms
//! like every other shape; the endpoints are cached.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{EPSILON, Real, lerp};
use crate::primitives::{closest_point_on_segment, ray_segment_intersects};
use crate::shapes::Ray;
use crate::traits::{Bounded, Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    center: Point2<Real>,
    orientation: UnitComplex<Real>,
    length: Real,
    endpoints: [Point2<Real>; 2],
}

impl Segment {
    /// Create a segment of `length` centered at `center`, running along the
    /// orientation's +x axis. Fails if `length` is negative.
    pub fn new(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        length: Real,
    ) -> Result<Self, ValidationError> {
        if length < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "length",
                value: length,
            });
        }
        Ok(Self::rebuild(center, orientation, length))
    }

    /// Segment between two endpoints. Coincident endpoints give a degenerate
    /// zero-length segment with identity orientation.
    pub fn from_endpoints(start: Point2<Real>, end: Point2<Real>) -> Self {
        let offset = end - start;
        let length = offset.norm();
        let orientation = if length > EPSILON {
            UnitComplex::rotation_between(&Vector2::x(), &offset)
        } else {
            UnitComplex::identity()
        };
        Self::rebuild(start + offset * 0.5, orientation, length)
    }

    /// Replace every parameter at once, re-validating.
    pub fn set(
        &mut self,
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        length: Real,
    ) -> Result<(), ValidationError> {
        *self = Self::new(center, orientation, length)?;
        Ok(())
    }

    fn rebuild(center: Point2<Real>, orientation: UnitComplex<Real>, length: Real) -> Self {
        let half = orientation * Vector2::new(length / 2.0, 0.0);
        Self {
            center,
            orientation,
            length,
            endpoints: [center - half, center + half],
        }
    }

    pub const fn center(&self) -> Point2<Real> {
        self.center
    }

    pub const fn orientation(&self) -> UnitComplex<Real> {
        self.orientation
    }

    pub const fn length(&self) -> Real {
        self.length
    }

    pub const fn start(&self) -> Point2<Real> {
        self.endpoints[0]
    }

    pub const fn end(&self) -> Point2<Real> {
        self.endpoints[1]
    }

    /// Fresh iterator over the two endpoints (a snapshot, not a live view).
    pub fn points(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.endpoints.iter().copied()
    }
}

impl Spatial for Segment {
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
        Self::rebuild(center, orientation, self.length * size_scale)
    }
}

impl Shape2d for Segment {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        closest_point_on_segment(self.endpoints[0], self.endpoints[1], point)
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        (self.closest_point(point) - point).norm() <= EPSILON
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        ray_segment_intersects(
            ray.origin(),
            &ray.direction(),
            self.endpoints[0],
            self.endpoints[1],
        )
    }
}

impl Interpolate for Segment {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        Self::rebuild(
            self.center + (other.center - self.center) * t,
            self.orientation.slerp(&other.orientation, t),
            lerp(self.length, other.length, t),
        )
    }
}

impl Bounded for Segment {
    fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.endpoints)
    }
}
