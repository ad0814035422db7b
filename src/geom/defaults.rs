//! Fixed proportions that live in code rather than in guide data.

/// Control-point offset for a cubic approximation of a quarter circle,
/// `(4/3)·tan(π/8)`, as a fraction of the radius.
pub const BEZIER_CIRCLE_K: f64 = 0.552284749831;

/// Guide angles are in 60,000ths of a degree: 10,800,000 units is π radians.
pub const ANGLE_UNITS_PER_PI: f64 = 10_800_000.0;
