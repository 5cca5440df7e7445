use crate::Fraction;
use crate::consts::{FLOAT_SCALE, STORED_MAX, STORED_MIN};
use hmath::{BigInt, Ratio};
use log::debug;
use ratl_error::{ErrorContext, FractionError};

// `f * FLOAT_SCALE` is computed in the width of the given float, then truncated.
// For example, `2.3f32 * 1000.0` is exactly `2300.0` in `f32` but
// `2299.99995...` in `f64`, so `2.3f32` is `23/10`, not `2299/1000`.

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(n: f32) -> Result<Fraction, FractionError> {
        if !n.is_finite() {
            return Err(non_finite_float(n.to_string()));
        }

        from_scaled((n * FLOAT_SCALE as f32).trunc() as f64, n.to_string())
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(n: f64) -> Result<Fraction, FractionError> {
        if !n.is_finite() {
            return Err(non_finite_float(n.to_string()));
        }

        from_scaled((n * FLOAT_SCALE as f64).trunc(), n.to_string())
    }
}

// `scaled` is already truncated
fn from_scaled(scaled: f64, original: String) -> Result<Fraction, FractionError> {
    if scaled < STORED_MIN as f64 || scaled > STORED_MAX as f64 {
        debug!("Fraction::try_from({original}): out of range after scaling");

        // `as` saturates, which is fine for an error message
        let mut e = FractionError::overflow(scaled as i64, FLOAT_SCALE as i64);
        e.set_err_context(ErrorContext::ConvertingFloat)
            .set_message(format!("tried to convert `{original}`"));

        return Err(e);
    }

    Fraction::new(scaled as i32, FLOAT_SCALE).map_err(
        |mut e| {
            e.set_err_context(ErrorContext::ConvertingFloat);
            e
        }
    )
}

fn non_finite_float(original: String) -> FractionError {
    debug!("Fraction::try_from({original}): not a finite number");

    let mut e = FractionError::invalid_argument();
    e.set_err_context(ErrorContext::ConvertingFloat)
        .set_message(format!("`{original}` can't be a fraction"));

    e
}

impl Fraction {
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

/// Conversions to arbitrary precision numbers.
pub trait IntoHmath {
    fn into_hmath_ratio(&self) -> Ratio;
}

impl IntoHmath for Fraction {
    fn into_hmath_ratio(&self) -> Ratio {
        Ratio::from_denom_and_numer(
            BigInt::from(self.denom as i64),
            BigInt::from(self.numer as i64),
        )
    }
}
