//! A regular N-gon, `N ≥ 2`, parametrized by center, orientation, side
//! length, and side count.
//!
//! ## Vertex layout
//!
//! In the local frame, vertices sit on the circumcircle at
//! `a0 + k·ext` where `ext = 2π/N` is the exterior angle. For even `N` the
//! first vertex angle is `a0 = π/2 − ext/2`, putting an edge flat across the
//! top ("flat-top": a square has axis-aligned edges); for odd `N` it is
//! `a0 = π/2`, putting a vertex at the top ("point-top": a pentagon points
//! up).
//!
//! ## Sector resolution
//!
//! Closest-point and containment share one derivation: map the query point
//! into the local frame, find which of the `N` angular wedges (bounded by
//! lines from the center through consecutive vertices) contains it, then
//! rotate into that wedge's canonical edge frame, where the edge is the
//! horizontal chord `y = inradius`, `x ∈ [−side/2, side/2]`. Inside the
//! wedge, the point is inside the polygon iff `y ≤ inradius`, and the
//! closest boundary point is the clamp of `x` onto the chord (snapping to a
//! vertex when the clamp saturates). A fixed angular offset of 1e-4 rad is
//! added before the wedge division so queries exactly on a vertex resolve
//! to one deterministic wedge.
//!
//! `N = 2` degenerates to a segment of length `side_length` along the
//! orientation's +x axis: inradius 0, circumradius `side_length/2`, and all
//! queries delegate to segment math on the two cached endpoints.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{EPSILON, FRAC_PI_2, Real, SECTOR_EPSILON, TAU, lerp};
use crate::primitives::{
    closest_point_on_ray, closest_point_on_segment, ray_segment_intersects,
};
use crate::shapes::Ray;
use crate::traits::{Bounded, Interpolate, Shape2d, Spatial};
use nalgebra::{Point2, UnitComplex, Vector2};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegularPolygon {
    center: Point2<Real>,
    orientation: UnitComplex<Real>,
    side_length: Real,
    side_count: usize,
    points: Vec<Point2<Real>>,
    inradius: Real,
    circumradius: Real,
}

impl RegularPolygon {
    /// Create a regular polygon. Fails if `side_length` is negative or
    /// `side_count < 2`.
    ///
    /// # Example
    /// ```
    /// use nalgebra::{Point2, UnitComplex};
    /// use planar::shapes::RegularPolygon;
    /// let hex =
    ///     RegularPolygon::new(Point2::origin(), UnitComplex::identity(), 1.0, 6).unwrap();
    /// assert_eq!(hex.points().count(), 6);
    /// ```
    pub fn new(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        side_length: Real,
        side_count: usize,
    ) -> Result<Self, ValidationError> {
        if side_length < 0.0 {
            return Err(ValidationError::NegativeSize {
                field: "side_length",
                value: side_length,
            });
        }
        if side_count < 2 {
            return Err(ValidationError::TooFewSides { side_count });
        }
        Ok(Self::rebuild(center, orientation, side_length, side_count))
    }

    /// Replace every parameter at once, re-validating.
    pub fn set(
        &mut self,
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        side_length: Real,
        side_count: usize,
    ) -> Result<(), ValidationError> {
        *self = Self::new(center, orientation, side_length, side_count)?;
        Ok(())
    }

    fn rebuild(
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        side_length: Real,
        side_count: usize,
    ) -> Self {
        let half_side = side_length / 2.0;
        let half_ext = TAU / side_count as Real / 2.0;
        let (inradius, circumradius) = if side_count == 2 {
            (0.0, half_side)
        } else {
            (half_side / half_ext.tan(), half_side / half_ext.sin())
        };
        let a0 = Self::first_vertex_angle(side_count);
        let ext = 2.0 * half_ext;
        let points = (0..side_count)
            .map(|k| {
                let angle = a0 + k as Real * ext;
                center + orientation * (Vector2::new(angle.cos(), angle.sin()) * circumradius)
            })
            .collect();
        Self {
            center,
            orientation,
            side_length,
            side_count,
            points,
            inradius,
            circumradius,
        }
    }

    fn first_vertex_angle(side_count: usize) -> Real {
        let ext = TAU / side_count as Real;
        if side_count % 2 == 0 {
            FRAC_PI_2 - ext / 2.0
        } else {
            FRAC_PI_2
        }
    }

    pub const fn center(&self) -> Point2<Real> {
        self.center
    }

    pub const fn orientation(&self) -> UnitComplex<Real> {
        self.orientation
    }

    pub const fn side_length(&self) -> Real {
        self.side_length
    }

    pub const fn side_count(&self) -> usize {
        self.side_count
    }

    /// Radius of the largest inscribed circle; exactly 0 for `N = 2`.
    pub const fn inradius(&self) -> Real {
        self.inradius
    }

    /// Radius of the smallest circumscribed circle.
    pub const fn circumradius(&self) -> Real {
        self.circumradius
    }

    pub fn area(&self) -> Real {
        self.side_count as Real * self.side_length * self.inradius / 2.0
    }

    pub fn perimeter(&self) -> Real {
        self.side_count as Real * self.side_length
    }

    /// Fresh iterator over the boundary vertices, counter-clockwise (a
    /// snapshot, not a live view).
    pub fn points(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.points.iter().copied()
    }

    /// Index of the angular wedge (edge) containing the local direction of
    /// `local`. The small fixed offset pushes exactly-on-a-vertex
    /// directions into one deterministic wedge.
    fn sector_index(&self, local: &Vector2<Real>) -> usize {
        let ext = TAU / self.side_count as Real;
        let angle = local.y.atan2(local.x) - Self::first_vertex_angle(self.side_count)
            + SECTOR_EPSILON;
        let angle = angle.rem_euclid(TAU);
        ((angle / ext) as usize).min(self.side_count - 1)
    }

    /// Rotation carrying wedge `k` onto the canonical top wedge, where the
    /// edge is the horizontal chord `y = inradius`.
    fn frame_rotation(&self, sector: usize) -> UnitComplex<Real> {
        let ext = TAU / self.side_count as Real;
        let odd_offset = if self.side_count % 2 == 0 { 0.0 } else { ext / 2.0 };
        UnitComplex::new(-(sector as Real) * ext - odd_offset)
    }

    fn to_local(&self, point: Point2<Real>) -> Vector2<Real> {
        self.orientation.inverse() * (point - self.center)
    }
}

impl Spatial for RegularPolygon {
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
            self.side_length * size_scale,
            self.side_count,
        )
    }
}

impl Shape2d for RegularPolygon {
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real> {
        if self.side_count == 2 {
            return closest_point_on_segment(self.points[0], self.points[1], point);
        }
        let local = self.to_local(point);
        let frame = self.frame_rotation(self.sector_index(&local));
        let framed = frame * local;
        if framed.y <= self.inradius {
            return point;
        }
        let half_side = self.side_length / 2.0;
        let on_edge = Vector2::new(framed.x.clamp(-half_side, half_side), self.inradius);
        self.center + self.orientation * (frame.inverse() * on_edge)
    }

    fn contains(&self, point: Point2<Real>) -> bool {
        if self.side_count == 2 {
            let closest = closest_point_on_segment(self.points[0], self.points[1], point);
            return (closest - point).norm() <= EPSILON;
        }
        let local = self.to_local(point);
        let frame = self.frame_rotation(self.sector_index(&local));
        (frame * local).y <= self.inradius
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        if self.side_count == 2 {
            return ray_segment_intersects(
                ray.origin(),
                &ray.direction(),
                self.points[0],
                self.points[1],
            );
        }
        if self.contains(ray.origin()) {
            return true;
        }
        let closest = closest_point_on_ray(ray.origin(), &ray.direction(), self.center);
        let dist = (closest - self.center).norm();
        if dist <= self.inradius {
            // The ray already penetrates the inscribed circle.
            return true;
        }
        if dist > self.circumradius {
            return false;
        }
        // Only the edge whose wedge holds the closest approach can be hit.
        let sector = self.sector_index(&self.to_local(closest));
        let a = self.points[sector];
        let b = self.points[(sector + 1) % self.side_count];
        ray_segment_intersects(ray.origin(), &ray.direction(), a, b)
    }
}

impl Interpolate for RegularPolygon {
    fn interpolated(&self, other: &Self, t: Real) -> Self {
        let side_count =
            lerp(self.side_count as Real, other.side_count as Real, t).round() as usize;
        Self::rebuild(
            self.center + (other.center - self.center) * t,
            self.orientation.slerp(&other.orientation, t),
            lerp(self.side_length, other.side_length, t),
            side_count.max(2),
        )
    }
}

impl Bounded for RegularPolygon {
    fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.points)
    }
}
