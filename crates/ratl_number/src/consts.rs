/// A float `f` becomes `trunc(f * FLOAT_SCALE) / FLOAT_SCALE`,
/// so only the first 3 decimal digits survive.
pub const FLOAT_SCALE: i32 = 1000;

// bounds of the stored numerator and denominator (inclusive)
pub const STORED_MIN: i64 = i32::MIN as i64;
pub const STORED_MAX: i64 = i32::MAX as i64;
