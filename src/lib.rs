#![deny(unused_imports)]

//! Fractions of two `i32`s, always kept in lowest terms.
//!
//! Arithmetic never loses precision: it either gives the exact result or
//! fails with `Overflow`. Floats are accepted wherever a fraction is, with
//! 3 decimal digits of precision.
//!
//! ```
//! use ratl::Fraction;
//!
//! let a = Fraction::new(1, 2)?;
//! let b = Fraction::new(1, 3)?;
//!
//! assert_eq!((a + b)?.to_string(), "5/6");
//! assert!((a * 0.5)? < b);
//! # Ok::<(), ratl::FractionError>(())
//! ```

pub use ratl_error::{
    ErrorContext,
    FractionError,
    FractionErrorKind,
    InputErrorKind,
};
pub use ratl_number::{
    Fraction,
    IntoHmath,
    Operand,
    add_fraction,
    consts,
    div_fraction,
    eq_fraction,
    ge_fraction,
    gt_fraction,
    mul_fraction,
    sub_fraction,
};
