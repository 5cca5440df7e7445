use crate::Fraction;
use ratl_error::FractionError;

/// Anything that can stand on the other side of a fraction in an operator.
/// Mixed operations convert the operand first and then run the
/// fraction-fraction version, so the arithmetic itself is written only once.
pub trait Operand {
    fn into_fraction(self) -> Result<Fraction, FractionError>;
}

impl Operand for Fraction {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(self)
    }
}

impl Operand for &Fraction {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(*self)
    }
}

impl Operand for i32 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Ok(Fraction::from(self))
    }
}

// 3 decimal digits, see `consts::FLOAT_SCALE`
impl Operand for f32 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::try_from(self)
    }
}

impl Operand for f64 {
    fn into_fraction(self) -> Result<Fraction, FractionError> {
        Fraction::try_from(self)
    }
}
