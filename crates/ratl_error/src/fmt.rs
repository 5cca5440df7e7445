use crate::{ErrorContext, FractionError};
use std::fmt;

impl fmt::Display for ErrorContext {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            ErrorContext::Unknown => "",
            ErrorContext::Constructing => "constructing a fraction",
            ErrorContext::ConvertingFloat => "converting a float to a fraction",
            ErrorContext::Adding => "adding fractions",
            ErrorContext::Subtracting => "subtracting fractions",
            ErrorContext::Multiplying => "multiplying fractions",
            ErrorContext::Dividing => "dividing fractions",
            ErrorContext::Parsing => "parsing a fraction",
        };

        write!(fmt, "{s}")
    }
}

// no colors, no title: use `render_error` for those
impl fmt::Display for FractionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "E{:04}: {}", self.kind.index(), self.kind.msg())
    }
}
