//! An annulus: the closed ring between two concentric circles.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{EPSILON, PI, Real, TAU, lerp};
use crate::primitives::closest_point_on_ray;
use crate::shapes::Ray;
use crate::traits::{Bounded, Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annulus {
    center: Point2<Real>,
    inner_radius: Real,
    outer_radius: Real,
}

impl Annulus {
    /// Create an annulus. Fails if either radius is negative or the inner
    /// radius exceeds the outer.
    pub fn new(
        center: Point2<Real>,
        inner_radius: Real,
        outer_radius: Real,
    ) -> Result<Self, ValidationError> {
        if inner_radius < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "inner_radius",
                value: inner_radius,
            });
        }
        if outer_radius < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "outer_radius",
                value: outer_radius,
            });
        }
        if inner_radius > outer_radius {
            return Err(ValidationError::InnerRadiusExceedsOuter {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        Ok(Self {
            center,
            inner_radius,
            outer_radius,
        })
    }

    /// Replace every parameter at once, re-validating.
    pub fn set(
        &mut self,
        center: Point2<Real>,
        inner_radius: Real,
        outer_radius: Real,
    ) -> Result<(), ValidationError> {
        *self = Self::new(center, inner_radius, outer_radius)?;
        Ok(())
    }

    pub const fn center(&self) -> Point2<Real> {
        self.center
    }

    pub const fn inner_radius(&self) -> Real {
        self.inner_radius
    }

    pub const fn outer_radius(&self) -> Real {
        self.outer_radius
    }

    pub fn area(&self) -> Real {
        PI * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius)
    }

    /// Total boundary length: both bounding circles.
    pub fn perimeter(&self) -> Real {
        TAU * (self.outer_radius + self.inner_radius)
    }
}

impl Spatial for Annulus {
    fn center(&self) -> Point2<Real> {
        self.center
    }

    fn orientation(&self) -> UnitComplex<Real> {
        UnitComplex::identity()
    }

    fn with_pose(
        &self,
        center: Point2<Real>,
        _orientation: UnitComplex<Real>,
        size_scale: Real,
    ) -> Self {
        Self {
            center,
            inner_radius: self.inner_radius * size_scale,
            outer_radius: self.outer_radius * size_scale,
        }
    }
}

impl Shape2d for Annulus {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        let offset = point - self.center;
        let dist = offset.norm();
        if dist < self.inner_radius {
            if dist <= EPSILON {
                // No unique direction from the exact center; resolve along +x.
                return self.center + Vector2::new(self.inner_radius, 0.0);
            }
            self.center + offset * (self.inner_radius / dist)
        } else if dist > self.outer_radius {
            self.center + offset * (self.outer_radius / dist)
        } else {
            point
        }
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        let dist = (point - self.center).norm();
        dist >= self.inner_radius && dist <= self.outer_radius
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        // A forward ray is unbounded, so once it comes within the outer
        // radius it must cross the ring band on the way out, hole or not.
        let closest = closest_point_on_ray(ray.origin(), &ray.direction(), self.center);
        (closest - self.center).norm() <= self.outer_radius
    }
}

impl Interpolate for Annulus {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        Self {
            center: self.center + (other.center - self.center) * t,
            inner_radius: lerp(self.inner_radius, other.inner_radius, t),
            outer_radius: lerp(self.outer_radius, other.outer_radius, t),
        }
    }
}

impl Bounded for Annulus {
    fn aabb(&self) -> Aabb {
        let r = Vector2::new(self.outer_radius, self.outer_radius);
        Aabb::new(self.center - r, self.center + r)
    }
}
