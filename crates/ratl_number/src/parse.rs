use crate::Fraction;
use log::debug;
use ratl_error::{ErrorContext, FractionError, InputErrorKind};
use std::str::FromStr;

impl Fraction {
    /// Reads a fraction from `input[cursor..]` and returns it with the new cursor.
    ///
    /// A fraction is two integers, either `N/D` or separated by whitespace (`N D`).
    /// Whitespace before the first integer and after `/` is skipped.
    ///
    /// `0` is the only integer that may stand alone, because that's how `Display`
    /// prints zero. It stands alone when it's at the end of the input, when the
    /// next integer is the numerator of an `N/D`, or when the next integer is
    /// another `0` (which can't be a denominator). So `0 5 7` is `0/5` followed by `7`.
    pub fn read(input: &[u8], cursor: usize) -> Result<(Fraction, usize), FractionError> {
        let cursor = skip_whitespace(input, cursor);
        let (numer, cursor) = read_integer(input, cursor)?;

        let (denom, cursor) = match input.get(cursor) {
            Some(b'/') => read_integer(input, skip_whitespace(input, cursor + 1))?,
            _ => {
                let next = skip_whitespace(input, cursor);

                if numer == 0 && zero_stands_alone(input, next) {
                    return Ok((Fraction::ZERO, next));
                }

                read_integer(input, next)?
            },
        };

        if denom == 0 {
            debug!("Fraction::read: zero denominator, numerator was {numer}");

            let mut e = FractionError::input_error(InputErrorKind::ZeroDenominator);
            e.set_message(format!("numerator was {numer}"));

            return Err(e);
        }

        // it fails only when the canonical form doesn't fit (`-2147483648 -1`)
        let fraction = Fraction::new(numer, denom).map_err(
            |mut e| {
                e.set_err_context(ErrorContext::Parsing);
                e
            }
        )?;

        Ok((fraction, cursor))
    }

    /// Reads fractions until the end of `input`.
    pub fn read_all(input: &str) -> Result<Vec<Fraction>, FractionError> {
        let input = input.as_bytes();
        let mut result = vec![];
        let mut cursor = skip_whitespace(input, 0);

        while cursor < input.len() {
            let (fraction, next) = Fraction::read(input, cursor)?;
            result.push(fraction);
            cursor = skip_whitespace(input, next);
        }

        Ok(result)
    }
}

/// Exactly one fraction, surrounded by optional whitespace.
impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.as_bytes();
        let (fraction, cursor) = Fraction::read(input, 0)?;
        let cursor = skip_whitespace(input, cursor);

        if cursor < input.len() {
            let rest = String::from_utf8_lossy(&input[cursor..]).to_string();
            debug!("Fraction::from_str({s:?}): trailing input");

            return Err(FractionError::input_error(InputErrorKind::TrailingInput(rest)));
        }

        Ok(fraction)
    }
}

fn skip_whitespace(input: &[u8], mut cursor: usize) -> usize {
    while let Some(b) = input.get(cursor) {
        if !b.is_ascii_whitespace() {
            break;
        }

        cursor += 1;
    }

    cursor
}

// `next` is where the integer after a `0` would start
fn zero_stands_alone(input: &[u8], next: usize) -> bool {
    next >= input.len()
    || input.get(token_end(input, next)) == Some(&b'/')
    || matches!(read_integer(input, next), Ok((0, _)))
}

// an integer token ends at whitespace, `/` or the end of the input
fn token_end(input: &[u8], cursor: usize) -> usize {
    let rest = input.get(cursor..).unwrap_or(&[]);

    cursor + rest.iter().position(
        |b| b.is_ascii_whitespace() || *b == b'/'
    ).unwrap_or(rest.len())
}

fn read_integer(input: &[u8], cursor: usize) -> Result<(i32, usize), FractionError> {
    let rest = input.get(cursor..).unwrap_or(&[]);
    let len = token_end(input, cursor).saturating_sub(cursor);
    let token = &rest[..len];

    if token.is_empty() {
        let kind = match rest.first() {
            None => InputErrorKind::UnexpectedEof,
            Some(b) => InputErrorKind::InvalidInteger(String::from_utf8_lossy(&[*b]).to_string()),
        };

        debug!("Fraction::read: {}", kind.msg());
        return Err(FractionError::input_error(kind));
    }

    let token_str = String::from_utf8_lossy(token).to_string();
    let digits = match token {
        [b'+' | b'-', digits @ ..] => digits,
        digits => digits,
    };

    if digits.is_empty() || !digits.iter().all(|b| b.is_ascii_digit()) {
        debug!("Fraction::read: `{token_str}` is not an integer");
        return Err(FractionError::input_error(InputErrorKind::InvalidInteger(token_str)));
    }

    // the token is a well-formed integer, so the only possible error is the range
    match token_str.parse::<i32>() {
        Ok(n) => Ok((n, cursor + len)),
        Err(_) => {
            debug!("Fraction::read: `{token_str}` is out of range");
            Err(FractionError::input_error(InputErrorKind::IntegerOutOfRange(token_str)))
        },
    }
}
