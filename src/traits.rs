//! Capability traits shared by every shape: the transform algebra
//! ([`Spatial`]), read-only geometric queries ([`Shape2d`]), interpolation
//! ([`Interpolate`]), and bounding ([`Bounded`]).

use crate::aabb::Aabb;
use crate::float_types::{EPSILON, Real};
use crate::shapes::{Circle, Ray};
use nalgebra::{Point2, UnitComplex, Vector2};

/// The sign of a scale factor as a rotation: identity for non-negative
/// factors, a half-turn for negative ones. A half-turn composed with a
/// positive uniform scale is exactly a 2D point reflection, so no separate
/// mirror flag is needed. A factor of exactly 0 counts as positive.
pub(crate) fn reflection_of(factor: Real) -> UnitComplex<Real> {
    if factor < 0.0 {
        UnitComplex::from_cos_sin_unchecked(-1.0, 0.0)
    } else {
        UnitComplex::identity()
    }
}

/// Rigid and similarity transforms, implemented once in terms of three
/// primitives each shape supplies.
///
/// Every `*ed_*` method returns a new value; the imperative forms
/// (`move_by`, `rotate_to`, …) update in place with identical math. All of
/// them funnel through [`Spatial::with_pose`], which rebuilds the shape's
/// cached geometry from canonical parameters in one pass, so composed
/// transforms never accumulate per-point floating error.
pub trait Spatial: Sized + Clone {
    /// The shape's center (a ray's origin).
    fn center(&self) -> Point2<Real>;

    /// The shape's orientation. Rotationally symmetric shapes report the
    /// identity.
    fn orientation(&self) -> UnitComplex<Real>;

    /// Rebuild the shape with the given absolute pose and every size
    /// parameter multiplied by `size_scale` (which is never negative —
    /// reflection is carried by the orientation argument).
    fn with_pose(
        &self,
        center: Point2<Real>,
        orientation: UnitComplex<Real>,
        size_scale: Real,
    ) -> Self;

    /// Translated by `displacement`.
    fn moved_by(&self, displacement: Vector2<Real>) -> Self {
        self.with_pose(self.center() + displacement, self.orientation(), 1.0)
    }

    /// Re-centered at `position`.
    fn moved_to(&self, position: Point2<Real>) -> Self {
        self.with_pose(position, self.orientation(), 1.0)
    }

    /// Rotated by `rotation` about the shape's own center.
    fn rotated_by(&self, rotation: UnitComplex<Real>) -> Self {
        self.with_pose(self.center(), self.orientation() * rotation, 1.0)
    }

    /// Re-oriented to the absolute `orientation`; the center is unchanged.
    fn rotated_to(&self, orientation: UnitComplex<Real>) -> Self {
        self.with_pose(self.center(), orientation, 1.0)
    }

    /// Rotated by `rotation` about an arbitrary `pivot`: the center swings
    /// around the pivot and the orientation composes.
    fn rotated_around_by(&self, pivot: Point2<Real>, rotation: UnitComplex<Real>) -> Self {
        let center = pivot + rotation * (self.center() - pivot);
        self.with_pose(center, self.orientation() * rotation, 1.0)
    }

    /// Rotated about `pivot` until the shape reaches the absolute
    /// `orientation`. The center-to-pivot distance is preserved while its
    /// direction turns by the same increment as the orientation; a center
    /// sitting on the pivot stays put.
    fn rotated_around_to(&self, pivot: Point2<Real>, orientation: UnitComplex<Real>) -> Self {
        let offset = self.center() - pivot;
        let center = if offset.norm() > EPSILON {
            let increment = orientation * self.orientation().inverse();
            pivot + increment * offset
        } else {
            self.center()
        };
        self.with_pose(center, orientation, 1.0)
    }

    /// Uniformly scaled about the shape's own center. A negative factor
    /// scales by `|factor|` and point-reflects through the center.
    fn scaled_by(&self, factor: Real) -> Self {
        self.with_pose(
            self.center(),
            self.orientation() * reflection_of(factor),
            factor.abs(),
        )
    }

    /// Uniformly scaled about an arbitrary `pivot`; the center moves to
    /// `pivot + factor·(center − pivot)`. Negative factors point-reflect
    /// through the pivot.
    fn dilated_by(&self, pivot: Point2<Real>, factor: Real) -> Self {
        let center = pivot + (self.center() - pivot) * factor;
        self.with_pose(center, self.orientation() * reflection_of(factor), factor.abs())
    }

    /// Displacement, rotation, and uniform scale applied together.
    fn transformed_by(
        &self,
        displacement: Vector2<Real>,
        rotation: UnitComplex<Real>,
        scale_factor: Real,
    ) -> Self {
        self.with_pose(
            self.center() + displacement,
            self.orientation() * rotation * reflection_of(scale_factor),
            scale_factor.abs(),
        )
    }

    /// Pose set to the absolute `position` and `orientation`.
    fn transformed_to(&self, position: Point2<Real>, orientation: UnitComplex<Real>) -> Self {
        self.with_pose(position, orientation, 1.0)
    }

    fn move_by(&mut self, displacement: Vector2<Real>) {
        *self = self.moved_by(displacement);
    }

    fn move_to(&mut self, position: Point2<Real>) {
        *self = self.moved_to(position);
    }

    fn rotate_by(&mut self, rotation: UnitComplex<Real>) {
        *self = self.rotated_by(rotation);
    }

    fn rotate_to(&mut self, orientation: UnitComplex<Real>) {
        *self = self.rotated_to(orientation);
    }

    fn rotate_around_by(&mut self, pivot: Point2<Real>, rotation: UnitComplex<Real>) {
        *self = self.rotated_around_by(pivot, rotation);
    }

    fn rotate_around_to(&mut self, pivot: Point2<Real>, orientation: UnitComplex<Real>) {
        *self = self.rotated_around_to(pivot, orientation);
    }

    fn scale_by(&mut self, factor: Real) {
        *self = self.scaled_by(factor);
    }

    fn dilate_by(&mut self, pivot: Point2<Real>, factor: Real) {
        *self = self.dilated_by(pivot, factor);
    }

    fn transform_by(
        &mut self,
        displacement: Vector2<Real>,
        rotation: UnitComplex<Real>,
        scale_factor: Real,
    ) {
        *self = self.transformed_by(displacement, rotation, scale_factor);
    }

    fn transform_to(&mut self, position: Point2<Real>, orientation: UnitComplex<Real>) {
        *self = self.transformed_to(position, orientation);
    }
}

/// Read-only geometric queries. These never mutate and never fail;
/// degenerate-but-valid shapes give mathematically sensible answers.
pub trait Shape2d {
    /// The point of the shape (boundary or interior) closest to `point`.
    /// Points already inside come back unchanged.
    fn closest_point(&self, point: Point2<Real>) -> Point2<Real>;

    /// Whether `point` lies inside or on the shape.
    fn contains(&self, point: Point2<Real>) -> bool;

    /// Whether the forward half of `ray` meets the shape.
    fn intersects_ray(&self, ray: &Ray) -> bool;

    /// Distance from `point` to the shape; zero inside.
    fn distance_to(&self, point: Point2<Real>) -> Real {
        (self.closest_point(point) - point).norm()
    }

    /// Whether the shape and `circle` overlap: exact for any shape, since
    /// two regions overlap iff the circle's center is within `radius` of
    /// the other region.
    fn intersects_circle(&self, circle: &Circle) -> bool {
        self.distance_to(circle.center()) <= circle.radius()
    }
}

/// Blending between two instances of the same shape: positions and size
/// parameters interpolate linearly, orientations spherically.
pub trait Interpolate {
    /// The blend of `self` (`t = 0`) and `other` (`t = 1`).
    fn interpolated(&self, other: &Self, t: Real) -> Self;
}

/// Shapes with a finite axis-aligned extent. Rays are unbounded and do not
/// implement this.
pub trait Bounded {
    fn aabb(&self) -> Aabb;
}
