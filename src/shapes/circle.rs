//! A circle: every point within `radius` of `center`.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{PI, Real, TAU, lerp};
use crate::primitives::closest_point_on_ray;
use crate::shapes::Ray;
use crate::traits::{Bounded, Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: Point2<Real>,
    radius: Real,
}

impl Circle {
    /// Create a circle. Fails if `radius` is negative.
    ///
    /// # Example
    /// ```
    /// use nalgebra::Point2;
    /// use planar::shapes::Circle;
    /// let c = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
    /// assert!(Circle::new(Point2::origin(), -1.0).is_err());
    /// ```
    pub fn new(center: Point2<Real>, radius: Real) -> Result<Self, ValidationError> {
        if radius < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "radius",
                value: radius,
            });
        }
        Ok(Self { center, radius })
    }

    /// Replace every parameter at once, re-validating.
    pub fn set(&mut self, center: Point2<Real>, radius: Real) -> Result<(), ValidationError> {
        *self = Self::new(center, radius)?;
        Ok(())
    }

    pub const fn center(&self) -> Point2<Real> {
        self.center
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub fn area(&self) -> Real {
        PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> Real {
        TAU * self.radius
    }
}

impl Spatial for Circle {
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
            radius: self.radius * size_scale,
        }
    }
}

impl Shape2d for Circle {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        let offset = point - self.center;
        let dist = offset.norm();
        if dist <= self.radius {
            point
        } else {
            self.center + offset * (self.radius / dist)
        }
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        (point - self.center).norm() <= self.radius
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        let closest = closest_point_on_ray(ray.origin(), &ray.direction(), self.center);
        (closest - self.center).norm() <= self.radius
    }
}

impl Interpolate for Circle {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        Self {
            center: self.center + (other.center - self.center) * t,
            radius: lerp(self.radius, other.radius, t),
        }
    }
}

impl Bounded for Circle {
    fn aabb(&self) -> Aabb {
        let r = Vector2::new(self.radius, self.radius);
        Aabb::new(self.center - r, self.center + r)
    }
}
