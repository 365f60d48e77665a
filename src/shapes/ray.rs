//! A half-line: an origin and a direction, extending forward only.

use crate::errors::ValidationError;
use crate::float_types::{EPSILON, PARALLEL_EPSILON, Real};
use crate::primitives::closest_point_on_ray;
use crate::traits::{Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

/// A ray: all points `origin + t·direction` for `t ≥ 0`. The direction is
/// the orientation's rotated +x axis, so rays compose with rotations the
/// same way every other shape does.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Point2<Real>,
    orientation: UnitComplex<Real>,
}

impl Ray {
    pub const fn new(origin: Point2<Real>, orientation: UnitComplex<Real>) -> Self {
        Self { origin, orientation }
    }

    /// Ray through `origin` along `direction` (need not be unit). Fails on a
    /// (near-)zero direction, which carries no heading.
    pub fn from_direction(
        origin: Point2<Real>,
        direction: Vector2<Real>,
    ) -> Result<Self, ValidationError> {
        if direction.norm() <= EPSILON {
            return Err(ValidationError::ZeroDirection);
        }
        Ok(Self {
            origin,
            orientation: UnitComplex::rotation_between(&Vector2::x(), &direction),
        })
    }

    pub const fn origin(&self) -> Point2<Real> {
        self.origin
    }

    pub const fn orientation(&self) -> UnitComplex<Real> {
        self.orientation
    }

    /// Unit direction vector.
    pub fn direction(&self) -> Vector2<Real> {
        self.orientation * Vector2::x()
    }

    /// The point `origin + t·direction`.
    pub fn point_at(&self, t: Real) -> Point2<Real> {
        self.origin + self.direction() * t
    }
}

impl Spatial for Ray {
    fn center(&self) -> Point2<Real> {
        self.origin
    }

    fn orientation(&self) -> UnitComplex<Real> {
        self.orientation
    }

    fn with_pose(
        &self,
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        _size_scale: Real,
    ) -> Self {
        // A ray has no size parameter; scaling only moves the origin.
        Self {
            origin: center,
            orientation,
        }
    }
}

impl Shape2d for Ray {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        closest_point_on_ray(self.origin, &self.direction(), point)
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        (self.closest_point(point) - point).norm() <= EPSILON
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        let d1 = self.direction();
        let d2 = ray.direction();
        let offset = ray.origin - self.origin;
        let denom = d1.perp(&d2);
        if denom.abs() < PARALLEL_EPSILON {
            // Parallel rays only meet when collinear, and then only if one
            // origin is ahead of the other or they run the same way.
            if d1.perp(&offset).abs() > EPSILON {
                return false;
            }
            return offset.dot(&d1) >= 0.0 || d1.dot(&d2) > 0.0;
        }
        let t = offset.perp(&d2) / denom;
        let u = offset.perp(&d1) / denom;
        t >= -EPSILON && u >= -EPSILON
    }
}

impl Interpolate for Ray {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        Self {
            origin: self.origin + (other.origin - self.origin) * t,
            orientation: self.orientation.slerp(&other.orientation, t),
        }
    }
}
