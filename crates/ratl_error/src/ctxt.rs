/// What the caller was doing when the error happened.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorContext {
    Unknown,
    Constructing,
    ConvertingFloat,
    Adding,
    Subtracting,
    Multiplying,
    Dividing,
    Parsing,
}
