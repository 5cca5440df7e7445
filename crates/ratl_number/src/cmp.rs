use crate::Fraction;
use std::cmp::Ordering;

// Unlike arithmetic, comparisons cross-multiply in `i32` without widening.
// Products that don't fit wrap around (two's complement), so operands near
// `i32::MAX` or `i32::MIN` may compare wrongly. See `tests::cmp_wrapping_test`.
fn cross_mul(lhs: &Fraction, rhs: &Fraction) -> (i32, i32) {
    (
        lhs.numer.wrapping_mul(rhs.denom),
        rhs.numer.wrapping_mul(lhs.denom),
    )
}

// denominators are always positive, so the cross multiplication doesn't flip the order

pub fn eq_fraction(lhs: &Fraction, rhs: &Fraction) -> bool {
    let (l, r) = cross_mul(lhs, rhs);
    l == r
}

pub fn gt_fraction(lhs: &Fraction, rhs: &Fraction) -> bool {
    let (l, r) = cross_mul(lhs, rhs);
    l > r
}

pub fn ge_fraction(lhs: &Fraction, rhs: &Fraction) -> bool {
    let (l, r) = cross_mul(lhs, rhs);
    l >= r
}

// `partial_cmp` of fractions never returns `None`
fn cmp_fraction(lhs: &Fraction, rhs: &Fraction) -> Ordering {
    if eq_fraction(lhs, rhs) {
        Ordering::Equal
    }

    else if gt_fraction(lhs, rhs) {
        Ordering::Greater
    }

    else {
        Ordering::Less
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        eq_fraction(self, other)
    }
}

// `<` and `<=` are negations of `>=` and `>`. They are never computed on their own.
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(cmp_fraction(self, other))
    }

    fn gt(&self, other: &Fraction) -> bool {
        gt_fraction(self, other)
    }

    fn ge(&self, other: &Fraction) -> bool {
        ge_fraction(self, other)
    }

    fn lt(&self, other: &Fraction) -> bool {
        !ge_fraction(self, other)
    }

    fn le(&self, other: &Fraction) -> bool {
        !gt_fraction(self, other)
    }
}

// A float that can't be converted (NaN, infinity, too large) is unordered:
// every comparison with it is false, except `!=`.
macro_rules! impl_cmp_for_float {
    ($($float: ty),*) => {
        $(
            impl PartialEq<$float> for Fraction {
                fn eq(&self, other: &$float) -> bool {
                    match Fraction::try_from(*other) {
                        Ok(other) => eq_fraction(self, &other),
                        Err(_) => false,
                    }
                }
            }

            impl PartialOrd<$float> for Fraction {
                fn partial_cmp(&self, other: &$float) -> Option<Ordering> {
                    Fraction::try_from(*other).ok().map(|other| cmp_fraction(self, &other))
                }

                fn gt(&self, other: &$float) -> bool {
                    Fraction::try_from(*other).map(|other| gt_fraction(self, &other)).unwrap_or(false)
                }

                fn ge(&self, other: &$float) -> bool {
                    Fraction::try_from(*other).map(|other| ge_fraction(self, &other)).unwrap_or(false)
                }

                fn lt(&self, other: &$float) -> bool {
                    Fraction::try_from(*other).map(|other| !ge_fraction(self, &other)).unwrap_or(false)
                }

                fn le(&self, other: &$float) -> bool {
                    Fraction::try_from(*other).map(|other| !gt_fraction(self, &other)).unwrap_or(false)
                }
            }

            impl PartialEq<Fraction> for $float {
                fn eq(&self, other: &Fraction) -> bool {
                    match Fraction::try_from(*self) {
                        Ok(s) => eq_fraction(&s, other),
                        Err(_) => false,
                    }
                }
            }

            impl PartialOrd<Fraction> for $float {
                fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                    Fraction::try_from(*self).ok().map(|s| cmp_fraction(&s, other))
                }

                fn gt(&self, other: &Fraction) -> bool {
                    Fraction::try_from(*self).map(|s| gt_fraction(&s, other)).unwrap_or(false)
                }

                fn ge(&self, other: &Fraction) -> bool {
                    Fraction::try_from(*self).map(|s| ge_fraction(&s, other)).unwrap_or(false)
                }

                fn lt(&self, other: &Fraction) -> bool {
                    Fraction::try_from(*self).map(|s| !ge_fraction(&s, other)).unwrap_or(false)
                }

                fn le(&self, other: &Fraction) -> bool {
                    Fraction::try_from(*self).map(|s| !gt_fraction(&s, other)).unwrap_or(false)
                }
            }
        )*
    };
}

impl_cmp_for_float!(f32, f64);
