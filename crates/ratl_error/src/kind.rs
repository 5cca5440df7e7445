#[derive(Clone, Debug, PartialEq)]
pub enum FractionErrorKind {
    // the denominator given to a constructor is 0
    // also used for floats that are NaN or infinite
    InvalidArgument,

    // the divisor's numerator is 0
    DivideByZero,

    // a widened intermediate doesn't fit in `i32`
    Overflow {
        numer: i64,
        denom: i64,
    },

    InputError(InputErrorKind),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputErrorKind {
    UnexpectedEof,
    InvalidInteger(String),
    IntegerOutOfRange(String),
    ZeroDenominator,

    // `FromStr` reads exactly one fraction
    TrailingInput(String),
}

impl FractionErrorKind {
    // main explanation of this error
    // no capital letters, no dot
    pub fn msg(&self) -> String {
        match self {
            FractionErrorKind::InvalidArgument => String::from("denominator can't be 0"),
            FractionErrorKind::DivideByZero => String::from("can't divide by zero"),
            FractionErrorKind::Overflow { numer, denom } => format!(
                "the result `{numer}/{denom}` overflows `i32`",
            ),
            FractionErrorKind::InputError(e) => format!("input failed: {}", e.msg()),
        }
    }

    // if the help msg is empty, it's ignored
    pub fn help(&self) -> String {
        match self {
            FractionErrorKind::Overflow { .. } => String::from(
                "Both the numerator and the denominator are checked before the reduction, so even a result that is small after reduction may overflow."
            ),
            FractionErrorKind::InputError(InputErrorKind::TrailingInput(_)) => String::from(
                "Use `Fraction::read_all` to read more than one fraction."
            ),
            FractionErrorKind::InputError(InputErrorKind::UnexpectedEof) => String::from(
                "A fraction is written as `N/D` or `N D`. `0` is the only number that can be written alone."
            ),
            _ => String::new(),
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            FractionErrorKind::InvalidArgument => 1,
            FractionErrorKind::DivideByZero => 2,
            FractionErrorKind::Overflow { .. } => 3,
            FractionErrorKind::InputError(_) => 4,
        }
    }
}

impl InputErrorKind {
    pub fn msg(&self) -> String {
        match self {
            InputErrorKind::UnexpectedEof => String::from("expected an integer, got nothing"),
            InputErrorKind::InvalidInteger(token) => format!("expected an integer, got `{token}`"),
            InputErrorKind::IntegerOutOfRange(token) => format!("`{token}` doesn't fit in `i32`"),
            InputErrorKind::ZeroDenominator => String::from("denominator can't be 0"),
            InputErrorKind::TrailingInput(rest) => format!("unexpected `{rest}` after a fraction"),
        }
    }
}
