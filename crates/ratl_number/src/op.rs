use crate::{Fraction, Operand, check_overflow, reduce_and_narrow};
use log::debug;
use ratl_error::{ErrorContext, FractionError};
use std::ops::{Add, Div, Mul, Sub};

// All the intermediate values are computed in `i64`. Both sides are checked
// against the range of `i32` before the reduction, not after.

pub fn add_fraction(lhs: Fraction, rhs: Fraction) -> Result<Fraction, FractionError> {
    let numer = lhs.numer as i64 * rhs.denom as i64 + rhs.numer as i64 * lhs.denom as i64;
    let denom = lhs.denom as i64 * rhs.denom as i64;

    check_and_reduce(numer, denom, lhs, rhs, ErrorContext::Adding)
}

pub fn sub_fraction(lhs: Fraction, rhs: Fraction) -> Result<Fraction, FractionError> {
    let numer = lhs.numer as i64 * rhs.denom as i64 - rhs.numer as i64 * lhs.denom as i64;
    let denom = lhs.denom as i64 * rhs.denom as i64;

    check_and_reduce(numer, denom, lhs, rhs, ErrorContext::Subtracting)
}

pub fn mul_fraction(lhs: Fraction, rhs: Fraction) -> Result<Fraction, FractionError> {
    let numer = lhs.numer as i64 * rhs.numer as i64;
    let denom = lhs.denom as i64 * rhs.denom as i64;

    check_and_reduce(numer, denom, lhs, rhs, ErrorContext::Multiplying)
}

pub fn div_fraction(lhs: Fraction, rhs: Fraction) -> Result<Fraction, FractionError> {
    if rhs.numer == 0 {
        debug!("div_fraction({lhs}, {rhs}): divisor is zero");

        let mut e = FractionError::divide_by_zero();
        e.set_err_context(ErrorContext::Dividing)
            .set_message(format!("{lhs} / {rhs}"));

        return Err(e);
    }

    let numer = lhs.numer as i64 * rhs.denom as i64;
    let denom = lhs.denom as i64 * rhs.numer as i64;

    check_and_reduce(numer, denom, lhs, rhs, ErrorContext::Dividing)
}

fn check_and_reduce(
    numer: i64,
    denom: i64,
    lhs: Fraction,
    rhs: Fraction,
    context: ErrorContext,
) -> Result<Fraction, FractionError> {
    check_overflow(numer, denom)
        .and_then(|_| reduce_and_narrow(numer, denom))
        .map_err(|mut e| {
            e.set_message(format!("lhs: {lhs}, rhs: {rhs}"));
            e.with_context(context)
        })
}

impl Fraction {
    pub fn checked_add<T: Operand>(self, rhs: T) -> Result<Fraction, FractionError> {
        add_fraction(self, rhs.into_fraction()?)
    }

    pub fn checked_sub<T: Operand>(self, rhs: T) -> Result<Fraction, FractionError> {
        sub_fraction(self, rhs.into_fraction()?)
    }

    pub fn checked_mul<T: Operand>(self, rhs: T) -> Result<Fraction, FractionError> {
        mul_fraction(self, rhs.into_fraction()?)
    }

    pub fn checked_div<T: Operand>(self, rhs: T) -> Result<Fraction, FractionError> {
        div_fraction(self, rhs.into_fraction()?)
    }

    /// `self += rhs`. `self` is untouched when it fails.
    /// It returns `self` so that the calls can be chained with `?`.
    pub fn add_mut<T: Operand>(&mut self, rhs: T) -> Result<&mut Self, FractionError> {
        *self = self.checked_add(rhs)?;
        Ok(self)
    }

    pub fn sub_mut<T: Operand>(&mut self, rhs: T) -> Result<&mut Self, FractionError> {
        *self = self.checked_sub(rhs)?;
        Ok(self)
    }

    pub fn mul_mut<T: Operand>(&mut self, rhs: T) -> Result<&mut Self, FractionError> {
        *self = self.checked_mul(rhs)?;
        Ok(self)
    }

    pub fn div_mut<T: Operand>(&mut self, rhs: T) -> Result<&mut Self, FractionError> {
        *self = self.checked_div(rhs)?;
        Ok(self)
    }

    /// `++x`
    pub fn pre_increment(&mut self) -> Result<&mut Self, FractionError> {
        self.add_mut(Fraction::ONE)
    }

    /// `x++`: returns the value before the increment.
    pub fn post_increment(&mut self) -> Result<Fraction, FractionError> {
        let prev = *self;
        self.add_mut(Fraction::ONE)?;

        Ok(prev)
    }

    /// `--x`
    pub fn pre_decrement(&mut self) -> Result<&mut Self, FractionError> {
        self.sub_mut(Fraction::ONE)
    }

    /// `x--`: returns the value before the decrement.
    pub fn post_decrement(&mut self) -> Result<Fraction, FractionError> {
        let prev = *self;
        self.sub_mut(Fraction::ONE)?;

        Ok(prev)
    }
}

// `Fraction (op) T` for any operand, by value or by reference
macro_rules! impl_op {
    ($($trait: ident, $method: ident, $checked: ident;)*) => {
        $(
            impl<T: Operand> $trait<T> for Fraction {
                type Output = Result<Fraction, FractionError>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.$checked(rhs)
                }
            }

            impl<T: Operand> $trait<T> for &Fraction {
                type Output = Result<Fraction, FractionError>;

                fn $method(self, rhs: T) -> Self::Output {
                    (*self).$checked(rhs)
                }
            }
        )*
    };
}

// `T (op) Fraction` where `T` is a primitive: `T` is converted first
macro_rules! impl_op_for_primitive {
    ($($lhs: ty),*) => {
        $(
            impl Add<Fraction> for $lhs {
                type Output = Result<Fraction, FractionError>;

                fn add(self, rhs: Fraction) -> Self::Output {
                    add_fraction(self.into_fraction()?, rhs)
                }
            }

            impl Sub<Fraction> for $lhs {
                type Output = Result<Fraction, FractionError>;

                fn sub(self, rhs: Fraction) -> Self::Output {
                    sub_fraction(self.into_fraction()?, rhs)
                }
            }

            impl Mul<Fraction> for $lhs {
                type Output = Result<Fraction, FractionError>;

                fn mul(self, rhs: Fraction) -> Self::Output {
                    mul_fraction(self.into_fraction()?, rhs)
                }
            }

            impl Div<Fraction> for $lhs {
                type Output = Result<Fraction, FractionError>;

                fn div(self, rhs: Fraction) -> Self::Output {
                    div_fraction(self.into_fraction()?, rhs)
                }
            }
        )*
    };
}

impl_op! {
    Add, add, checked_add;
    Sub, sub, checked_sub;
    Mul, mul, checked_mul;
    Div, div, checked_div;
}

impl_op_for_primitive!(i32, f32, f64);
