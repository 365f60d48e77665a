//! Shared geometric primitives the shape queries are built from:
//! segment/ray closest-point projection, ray–segment intersection, and the
//! ray–axis-aligned-box slab test.

use crate::float_types::{EPSILON, PARALLEL_EPSILON, Real};
use nalgebra::{Point2, Vector2};

/// Closest point to `p` on the segment from `a` to `b`.
///
/// Projects `p` onto the carrying line and clamps the projection parameter
/// to `[0, 1]`. A degenerate segment (`a ≈ b`) collapses to `a`.
pub fn closest_point_on_segment(
    a: Point2<Real>,
    b: Point2<Real>,
    p: Point2<Real>,
) -> Point2<Real> {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < EPSILON * EPSILON {
        return a;
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Closest point to `p` on the forward half of a ray. `dir` must be unit.
pub fn closest_point_on_ray(
    origin: Point2<Real>,
    dir: &Vector2<Real>,
    p: Point2<Real>,
) -> Point2<Real> {
    let t = (p - origin).dot(dir).max(0.0);
    origin + dir * t
}

/// Whether the forward half of a ray meets the segment from `a` to `b`.
/// `dir` must be unit.
pub fn ray_segment_intersects(
    origin: Point2<Real>,
    dir: &Vector2<Real>,
    a: Point2<Real>,
    b: Point2<Real>,
) -> bool {
    let ab = b - a;
    let ao = a - origin;
    let denom = dir.perp(&ab);
    if denom.abs() < PARALLEL_EPSILON {
        // Parallel: only a collinear segment with some part ahead can hit.
        if dir.perp(&ao).abs() > EPSILON {
            return false;
        }
        let ta = ao.dot(dir);
        let tb = (b - origin).dot(dir);
        return ta.max(tb) >= 0.0;
    }
    let t = ao.perp(&ab) / denom;
    let u = ao.perp(dir) / denom;
    t >= -EPSILON && (-EPSILON..=1.0 + EPSILON).contains(&u)
}

/// Slab test: whether the forward half of a ray meets the axis-aligned box
/// `[mins, maxs]`. The ray's parametric range is intersected against each
/// axis's min/max planes; an axis the ray runs parallel to degenerates to an
/// interval membership test on the origin.
pub fn slab_intersects(
    origin: Point2<Real>,
    dir: &Vector2<Real>,
    mins: Point2<Real>,
    maxs: Point2<Real>,
) -> bool {
    let mut t_near: Real = 0.0;
    let mut t_far = Real::INFINITY;
    for axis in 0..2 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < PARALLEL_EPSILON {
            if o < mins[axis] || o > maxs[axis] {
                return false;
            }
        } else {
            let inv = 1.0 / d;
            let mut t1 = (mins[axis] - o) * inv;
            let mut t2 = (maxs[axis] - o) * inv;
            if t1 > t2 {
                core::mem::swap(&mut t1, &mut t2);
            }
            t_near = t_near.max(t1);
            t_far = t_far.min(t2);
            if t_near > t_far {
                return false;
            }
        }
    }
    true
}
