use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point2<Real>, maxs: Point2<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box covering every point. An empty slice yields a degenerate
    /// box at the origin.
    pub fn from_points(points: &[Point2<Real>]) -> Self {
        let mut mins = Point2::origin();
        let mut maxs = Point2::origin();
        if let Some((first, rest)) = points.split_first() {
            mins = *first;
            maxs = *first;
            for p in rest {
                mins.x = mins.x.min(p.x);
                mins.y = mins.y.min(p.y);
                maxs.x = maxs.x.max(p.x);
                maxs.y = maxs.y.max(p.y);
            }
        }
        Self { mins, maxs }
    }

    #[inline]
    pub fn center(&self) -> Point2<Real> {
        self.mins + (self.maxs - self.mins) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vector2<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The box grown by `margin` on every side.
    #[inline]
    pub fn inflated(&self, margin: Real) -> Self {
        let m = Vector2::new(margin, margin);
        Self {
            mins: self.mins - m,
            maxs: self.maxs + m,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point2<Real>) -> bool {
        p.x >= self.mins.x && p.x <= self.maxs.x && p.y >= self.mins.y && p.y <= self.maxs.y
    }
}
