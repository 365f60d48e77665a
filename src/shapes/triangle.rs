//! A general triangle. Canonically stored as centroid + orientation + three
//! local vertex offsets, so the shared transform algebra applies; the world
//! vertices are cached.

use crate::aabb::Aabb;
use crate::float_types::{EPSILON, Real};
use crate::primitives::{closest_point_on_segment, ray_segment_intersects};
use crate::shapes::Ray;
use crate::traits::{Bounded, Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    center: Point2<Real>,
    orientation: UnitComplex<Real>,
    local: [Vector2<Real>; 3],
    points: [Point2<Real>; 3],
}

impl Triangle {
    /// Triangle through three world points. Any three points are valid,
    /// including collinear ones (a degenerate sliver).
    pub fn new(a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) -> Self {
        let center = Point2::from((a.coords + b.coords + c.coords) / 3.0);
        Self::rebuild(
            center,
            UnitComplex::identity(),
            [a - center, b - center, c - center],
        )
    }

    /// Replace the three vertices, recomputing the centroid.
    pub fn set(&mut self, a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) {
        *self = Self::new(a, b, c);
    }

    fn rebuild(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        local: [Vector2<Real>; 3],
    ) -> Self {
        Self {
            center,
            orientation,
            local,
            points: local.map(|v| center + orientation * v),
        }
    }

    pub const fn center(&self) -> Point2<Real> {
        self.center
    }

    pub const fn orientation(&self) -> UnitComplex<Real> {
        self.orientation
    }

    pub const fn vertices(&self) -> [Point2<Real>; 3] {
        self.points
    }

    /// Fresh iterator over the three vertices (a snapshot, not a live view).
    pub fn points(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.points.iter().copied()
    }

    pub fn area(&self) -> Real {
        let [a, b, c] = self.points;
        (b - a).perp(&(c - a)).abs() / 2.0
    }

    pub fn perimeter(&self) -> Real {
        let [a, b, c] = self.points;
        (b - a).norm() + (c - b).norm() + (a - c).norm()
    }
}

impl Spatial for Triangle {
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
        Self::rebuild(center, orientation, self.local.map(|v| v * size_scale))
    }
}

impl Shape2d for Triangle {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        if self.contains(point) {
            return point;
        }
        let [a, b, c] = self.points;
        let mut best = closest_point_on_segment(a, b, point);
        let mut best_dist = (best - point).norm_squared();
        for (start, end) in [(b, c), (c, a)] {
            let candidate = closest_point_on_segment(start, end, point);
            let dist = (candidate - point).norm_squared();
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        best
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        // Half-plane sign test, tolerant of either winding.
        let [a, b, c] = self.points;
        let d1 = (b - a).perp(&(point - a));
        let d2 = (c - b).perp(&(point - b));
        let d3 = (a - c).perp(&(point - c));
        let has_neg = d1 < -EPSILON || d2 < -EPSILON || d3 < -EPSILON;
        let has_pos = d1 > EPSILON || d2 > EPSILON || d3 > EPSILON;
        !(has_neg && has_pos)
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        if self.contains(ray.origin()) {
            return true;
        }
        let [a, b, c] = self.points;
        let origin = ray.origin();
        let dir = ray.direction();
        ray_segment_intersects(origin, &dir, a, b)
            || ray_segment_intersects(origin, &dir, b, c)
            || ray_segment_intersects(origin, &dir, c, a)
    }
}

impl Interpolate for Triangle {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        let local = [0, 1, 2].map(|i| self.local[i] + (other.local[i] - self.local[i]) * t);
        Self::rebuild(
            self.center + (other.center - self.center) * t,
            self.orientation.slerp(&other.orientation, t),
            local,
        )
    }
}

impl Bounded for Triangle {
    fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.points)
    }
}
