#![deny(unused_imports)]

// set it to false to turn off the invariant checks in debug builds
pub const TEST_MODE: bool = true;

#[macro_export]
macro_rules! ratl_assert {
    ($($x: expr),* $(,)?) => {
        if $crate::TEST_MODE && cfg!(debug_assertions) {
            assert!($($x),*);
        }
    };
}

/// Checks that `(numer, denom)` is in lowest terms with the sign on the numerator.
/// Both sides are taken as `i64`s so that it can be called before narrowing.
#[macro_export]
macro_rules! ratl_assert_canonical {
    ($numer: expr, $denom: expr $(,)?) => {
        if $crate::TEST_MODE && cfg!(debug_assertions) {
            let (numer, denom): (i64, i64) = ($numer, $denom);

            assert!(denom > 0, "denominator of {numer}/{denom} is not positive");

            if numer == 0 {
                assert_eq!(denom, 1, "zero is not represented as 0/1");
            }

            else {
                assert_eq!(
                    $crate::gcd_for_test(numer.unsigned_abs(), denom as u64),
                    1,
                    "{numer}/{denom} is not reduced",
                );
            }
        }
    };
}

// The macro above cannot name a function in the caller's crate, so it lives here.
#[doc(hidden)]
pub fn gcd_for_test(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    }

    else {
        gcd_for_test(b, a % b)
    }
}
