use crate::Fraction;
use std::fmt;

// `0` or `N/D`. It's always in lowest terms because the fields are.
impl fmt::Display for Fraction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.numer == 0 {
            write!(fmt, "0")
        }

        else {
            write!(fmt, "{}/{}", self.numer, self.denom)
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Fraction({}/{})", self.numer, self.denom)
    }
}
