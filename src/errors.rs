use crate::float_types::Real;
use thiserror::Error;

/// All the ways shape construction can be rejected. Raised only by
/// constructors and `set`; transforms and queries are total over
/// already-validated shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A size parameter was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeSize {
        field: &'static str,
        value: Real,
    },
    /// An annulus was given a hole larger than its outer boundary.
    #[error("inner radius {inner} exceeds outer radius {outer}")]
    InnerRadiusExceedsOuter { inner: Real, outer: Real },
    /// A rounded rectangle's corner radius does not fit the shorter side.
    #[error(
        "corner radius {corner_radius} exceeds half the shorter side of a {width} x {height} rectangle"
    )]
    CornerRadiusTooLarge {
        corner_radius: Real,
        width: Real,
        height: Real,
    },
    /// A regular polygon needs at least two sides.
    #[error("a regular polygon needs at least 2 sides, got {side_count}")]
    TooFewSides { side_count: usize },
    /// A direction was requested from a (near-)zero vector.
    #[error("direction vector must be non-zero")]
    ZeroDirection,
}
