use super::{gcd, random_fraction, random_wide_fraction};
use crate::Fraction;

#[test]
fn canonical_form_prop() {
    for _ in 0..4096 {
        let f = random_wide_fraction();

        assert!(f.denom() > 0, "{f:?}");

        if f.numer() == 0 {
            assert_eq!(f.denom(), 1);
        }

        else {
            assert_eq!(gcd(f.numer().unsigned_abs() as u64, f.denom() as u64), 1, "{f:?}");
        }
    }

    for _ in 0..256 {
        let denom = rand::random::<i32>();

        if denom != 0 {
            let f = Fraction::new(0, denom).unwrap();
            assert_eq!((f.numer(), f.denom()), (0, 1));
        }
    }
}

#[test]
fn commutative_prop() {
    for _ in 0..4096 {
        let a = random_fraction(1 << 14);
        let b = random_fraction(1 << 14);

        assert_eq!((a + b).unwrap(), (b + a).unwrap(), "{a} + {b}");
        assert_eq!((a * b).unwrap(), (b * a).unwrap(), "{a} * {b}");
    }
}

#[test]
fn identity_prop() {
    for _ in 0..4096 {
        let a = random_wide_fraction();
        let sum = (a + Fraction::new(0, 1).unwrap()).unwrap();
        let product = (a * Fraction::new(1, 1).unwrap()).unwrap();

        // compare the fields: `==` wraps for large operands
        assert_eq!((sum.numer(), sum.denom()), (a.numer(), a.denom()));
        assert_eq!((product.numer(), product.denom()), (a.numer(), a.denom()));
    }
}

#[test]
fn inverse_prop() {
    for _ in 0..4096 {
        let a = random_fraction(1 << 7);
        let b = random_fraction(1 << 7);

        if b.is_zero() {
            assert!((a / b).unwrap_err().is_divide_by_zero());
            continue;
        }

        let q = (a / b).unwrap();
        assert_eq!((q * b).unwrap(), a, "({a} / {b}) * {b}");
    }
}

#[test]
fn sub_is_add_of_negation_prop() {
    for _ in 0..4096 {
        let a = random_fraction(1 << 14);
        let b = random_fraction(1 << 14);
        let neg_b = Fraction::new(-b.numer(), b.denom()).unwrap();

        assert_eq!((a - b).unwrap(), (a + neg_b).unwrap(), "{a} - {b}");
    }
}

#[test]
fn compound_assign_prop() {
    for _ in 0..1024 {
        let a = random_fraction(1 << 10);
        let b = random_fraction(1 << 10);
        let mut c = a;

        c.add_mut(b).unwrap();
        assert_eq!(c, (a + b).unwrap());

        c.sub_mut(b).unwrap();
        assert_eq!(c, a);

        c.mul_mut(b).unwrap();
        assert_eq!(c, (a * b).unwrap());

        let prev = c.post_increment().unwrap();
        assert_eq!(c, (prev + 1).unwrap());
        c.pre_decrement().unwrap();
        assert_eq!(c, prev);
    }
}
