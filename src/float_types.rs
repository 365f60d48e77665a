// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// A small epsilon for distance comparisons, adjusted per precision.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// A small epsilon for distance comparisons, adjusted per precision.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-5;

/// Angular offset (radians) added before resolving a boundary direction to a
/// polygon sector, so that queries exactly on a vertex land in one
/// deterministic sector.
pub const SECTOR_EPSILON: Real = 1e-4;

/// Cross-product magnitude under which two directions count as parallel.
#[cfg(feature = "f32")]
pub const PARALLEL_EPSILON: Real = 1e-4;
/// Cross-product magnitude under which two directions count as parallel.
#[cfg(feature = "f64")]
pub const PARALLEL_EPSILON: Real = 1e-6;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// `true` when `a` and `b` differ by less than `eps`.
#[inline]
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Linear blend of two scalars, `a` at `t = 0` and `b` at `t = 1`.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}
