//! A rectangle with quarter-circle corner fillets.
//!
//! The region is the union of two overlapping axis-aligned rectangles in
//! the local frame — one spanning the full width with the height reduced by
//! `2·corner_radius`, one spanning the full height with the width reduced
//! likewise — plus four quarter-disks of the corner radius centered on the
//! inset corner centers `(±(w/2 − r), ±(h/2 − r))`. Every query maps the
//! input into the local frame once and works against that compound model;
//! the eight straight-edge endpoints and four arc centers are cached in
//! world coordinates.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{PI, Real, TAU, lerp};
use crate::primitives::slab_intersects;
use crate::shapes::Ray;
use crate::traits::{Bounded, Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedRectangle {
    center: Point2<Real>,
    orientation: UnitComplex<Real>,
    width: Real,
    height: Real,
    corner_radius: Real,
    edge_points: [Point2<Real>; 8],
    arc_centers: [Point2<Real>; 4],
}

impl RoundedRectangle {
    /// Create a rounded rectangle. Fails if any size is negative or the
    /// corner radius exceeds half the shorter side.
    ///
    /// # Example
    /// ```
    /// use nalgebra::{Point2, UnitComplex};
    /// use planar::shapes::RoundedRectangle;
    /// let slot = RoundedRectangle::new(
    ///     Point2::origin(),
    ///     UnitComplex::identity(),
    ///     4.0,
    ///     2.0,
    ///     0.5,
    /// )
    /// .unwrap();
    /// assert_eq!(slot.arc_centers().count(), 4);
    /// ```
    pub fn new(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        width: Real,
        height: Real,
        corner_radius: Real,
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
        if corner_radius < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "corner_radius",
                value: corner_radius,
            });
        }
        if corner_radius > width.min(height) / 2.0 {
            return Err(ValidationError::CornerRadiusTooLarge {
                corner_radius,
                width,
                height,
            });
        }
        Ok(Self::rebuild(center, orientation, width, height, corner_radius))
    }

    /// Replace every parameter at once, re-validating.
    pub fn set(
        &mut self,
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        width: Real,
        height: Real,
        corner_radius: Real,
    ) -> Result<(), ValidationError> {
        *self = Self::new(center, orientation, width, height, corner_radius)?;
        Ok(())
    }

    fn rebuild(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        width: Real,
        height: Real,
        corner_radius: Real,
    ) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let iw = hw - corner_radius;
        let ih = hh - corner_radius;
        let world = |x: Real, y: Real| center + orientation * Vector2::new(x, y);
        // Straight-edge endpoints, counter-clockwise from the bottom of the
        // right edge.
        let edge_points = [
            world(hw, -ih),
            world(hw, ih),
            world(iw, hh),
            world(-iw, hh),
            world(-hw, ih),
            world(-hw, -ih),
            world(-iw, -hh),
            world(iw, -hh),
        ];
        let arc_centers = [
            world(iw, ih),
            world(-iw, ih),
            world(-iw, -ih),
            world(iw, -ih),
        ];
        Self {
            center,
            orientation,
            width,
            height,
            corner_radius,
            edge_points,
            arc_centers,
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

    pub const fn corner_radius(&self) -> Real {
        self.corner_radius
    }

    pub fn area(&self) -> Real {
        // Full rectangle, minus the four square corner blocks, plus the
        // four quarter disks that replace them.
        self.width * self.height - (4.0 - PI) * self.corner_radius * self.corner_radius
    }

    pub fn perimeter(&self) -> Real {
        2.0 * (self.width - 2.0 * self.corner_radius)
            + 2.0 * (self.height - 2.0 * self.corner_radius)
            + TAU * self.corner_radius
    }

    /// Fresh iterator over the eight straight-edge endpoints,
    /// counter-clockwise (a snapshot, not a live view).
    pub fn points(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.edge_points.iter().copied()
    }

    /// Fresh iterator over the four corner-arc centers (a snapshot, not a
    /// live view).
    pub fn arc_centers(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.arc_centers.iter().copied()
    }

    fn to_local(&self, point: Point2<Real>) -> Vector2<Real> {
        self.orientation.inverse() * (point - self.center)
    }

    fn from_local(&self, local: Vector2<Real>) -> Point2<Real> {
        self.center + self.orientation * local
    }
}

impl Spatial for RoundedRectangle {
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
            self.corner_radius * size_scale,
        )
    }
}

impl Shape2d for RoundedRectangle {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        let local = self.to_local(point);
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let iw = hw - self.corner_radius;
        let ih = hh - self.corner_radius;
        if local.x.abs() > iw && local.y.abs() > ih {
            // Corner zone: project radially onto that quadrant's arc.
            let corner = Vector2::new(local.x.signum() * iw, local.y.signum() * ih);
            let offset = local - corner;
            let dist = offset.norm();
            if dist > self.corner_radius {
                return self.from_local(corner + offset * (self.corner_radius / dist));
            }
            point
        } else if local.x.abs() > hw {
            self.from_local(Vector2::new(local.x.signum() * hw, local.y))
        } else if local.y.abs() > hh {
            self.from_local(Vector2::new(local.x, local.y.signum() * hh))
        } else {
            point
        }
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        let local = self.to_local(point);
        let ax = local.x.abs();
        let ay = local.y.abs();
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let iw = hw - self.corner_radius;
        let ih = hh - self.corner_radius;
        if (ax <= hw && ay <= ih) || (ax <= iw && ay <= hh) {
            return true;
        }
        let corner = Vector2::new(local.x.signum() * iw, local.y.signum() * ih);
        (local - corner).norm() <= self.corner_radius
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        let origin = Point2::from(self.to_local(ray.origin()));
        let dir = self.orientation.inverse() * ray.direction();
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let iw = hw - self.corner_radius;
        let ih = hh - self.corner_radius;
        if slab_intersects(origin, &dir, Point2::new(-hw, -ih), Point2::new(hw, ih)) {
            return true;
        }
        if slab_intersects(origin, &dir, Point2::new(-iw, -hh), Point2::new(iw, hh)) {
            return true;
        }
        // Neither box: only the corner arcs remain.
        [
            Vector2::new(iw, ih),
            Vector2::new(-iw, ih),
            Vector2::new(-iw, -ih),
            Vector2::new(iw, -ih),
        ]
        .iter()
        .any(|&corner| {
            let t = (corner - origin.coords).dot(&dir).max(0.0);
            let closest = origin.coords + dir * t;
            (closest - corner).norm() <= self.corner_radius
        })
    }
}

impl Interpolate for RoundedRectangle {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        Self::rebuild(
            self.center + (other.center - self.center) * t,
            self.orientation.slerp(&other.orientation, t),
            lerp(self.width, other.width, t),
            lerp(self.height, other.height, t),
            lerp(self.corner_radius, other.corner_radius, t),
        )
    }
}

impl Bounded for RoundedRectangle {
    fn aabb(&self) -> Aabb {
        // Exact: the box of the rotated inset rectangle, grown by the
        // corner radius.
        Aabb::from_points(&self.arc_centers).inflated(self.corner_radius)
    }
}
