//! A 2D **computational-geometry kernel**: parametric shape types (circle,
//! annulus, rectangle, rounded rectangle, regular N-gon, triangle, segment,
//! ray) supporting rigid and similarity transforms (translate, rotate,
//! uniform scale, point reflection), geometric queries (closest point,
//! containment, ray intersection, circle intersection), and interpolation
//! between two instances of the same shape.
//!
//! Orientations are represented as [`nalgebra::UnitComplex`] values: the
//! real part is the cosine and the imaginary part the sine of the rotation
//! angle, composition is complex multiplication and the inverse is the
//! conjugate, so chained rotations stay O(1) and free of angle wraparound.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **serde**: `Serialize`/`Deserialize` for every shape type

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod primitives;
pub mod shapes;
pub mod traits;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");
