#![deny(unused_imports)]

use log::{debug, trace};
use ratl_error::{ErrorContext, FractionError};
use ratl_test::{ratl_assert, ratl_assert_canonical};

pub mod consts;
mod cmp;
mod convert;
mod fmt;
mod op;
mod operand;
mod parse;


pub use cmp::{eq_fraction, ge_fraction, gt_fraction};
pub use convert::IntoHmath;
pub use op::{add_fraction, div_fraction, mul_fraction, sub_fraction};
pub use operand::Operand;

use consts::{STORED_MAX, STORED_MIN};

// 1. `denom` is always greater than 0.
// 2. `numer` and `denom` are coprime.
// 3. If `numer` is 0, `denom` must be 1.
// Every constructor that takes a pair goes through `reduce_and_narrow`.
#[derive(Clone, Copy)]
pub struct Fraction {
    numer: i32,
    denom: i32,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };
    pub const ONE: Fraction = Fraction { numer: 1, denom: 1 };

    /// `Fraction::new(2, -4)` is `-1/2`.
    ///
    /// It fails with `InvalidArgument` if `denom` is 0, and with `Overflow`
    /// if the reduced form doesn't fit in `i32` (`i32::MIN / -1`).
    pub fn new(numer: i32, denom: i32) -> Result<Self, FractionError> {
        if denom == 0 {
            debug!("Fraction::new({numer}, {denom}): zero denominator");

            let mut e = FractionError::invalid_argument();
            e.set_err_context(ErrorContext::Constructing)
                .set_message(format!("numerator was {numer}"));

            return Err(e);
        }

        reduce_and_narrow(numer as i64, denom as i64).map_err(
            |e| e.with_context(ErrorContext::Constructing)
        )
    }

    pub fn numer(&self) -> i32 {
        self.numer
    }

    pub fn denom(&self) -> i32 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Fraction { numer: n, denom: 1 }
    }
}

/// Fails if either side is out of the range of `i32`. It's the only overflow
/// check in the crate: arithmetic calls it on the widened results before
/// anything is narrowed.
pub(crate) fn check_overflow(numer: i64, denom: i64) -> Result<(), FractionError> {
    if numer > STORED_MAX || denom > STORED_MAX || numer < STORED_MIN || denom < STORED_MIN {
        debug!("check_overflow({numer}, {denom}): out of range");
        Err(FractionError::overflow(numer, denom))
    }

    else {
        Ok(())
    }
}

/// `numer` and `denom` are in the range of `i32` and `denom` is not 0.
/// The reduction happens in `i64` and the result is narrowed at the end.
pub(crate) fn reduce_and_narrow(numer: i64, denom: i64) -> Result<Fraction, FractionError> {
    ratl_assert!(denom != 0);
    ratl_assert!(STORED_MIN <= numer && numer <= STORED_MAX && STORED_MIN <= denom && denom <= STORED_MAX);

    if numer == 0 {
        return Ok(Fraction::ZERO);
    }

    let r = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i64;
    let mut numer = numer / r;
    let mut denom = denom / r;

    if denom < 0 {
        numer = -numer;
        denom = -denom;
    }

    ratl_assert_canonical!(numer, denom);

    if r != 1 {
        trace!("reduce_and_narrow: divided by {r}, got {numer}/{denom}");
    }

    // `i32::MIN / -1` is the only pair that can get here
    check_overflow(numer, denom)?;

    Ok(Fraction {
        numer: numer as i32,
        denom: denom as i32,
    })
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    }

    else {
        gcd(b, a % b)
    }
}
