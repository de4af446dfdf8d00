//! Free-form numeric text parsing.

use crate::NumericSequence;

/// Error type for parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input contained nothing to parse
    #[error("Input is empty")]
    Empty,
    /// A token could not be read as a number
    #[error("Invalid number {token:?} at position {position}")]
    InvalidToken { position: usize, token: String },
    /// A token parsed, but to NaN or an infinity
    #[error("Number {token:?} at position {position} is not finite")]
    NotFinite { position: usize, token: String },
}

/// Separator used to split an input string into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Separator {
    /// `", "`
    CommaSpace,
    /// `","`
    Comma,
    /// `" "`
    Space,
}

impl Separator {
    /// Pick the separator for `input`.
    ///
    /// Comma-space wins over a bare comma, which wins over a space.
    pub fn infer(input: &str) -> Self {
        if input.contains(", ") {
            Separator::CommaSpace
        } else if input.contains(',') {
            Separator::Comma
        } else {
            Separator::Space
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::CommaSpace => ", ",
            Separator::Comma => ",",
            Separator::Space => " ",
        }
    }
}

/// Parse free-form text into a [`NumericSequence`].
///
/// The separator is inferred with [`Separator::infer`]. Surrounding
/// whitespace on each token is ignored, but an empty token is an error, as
/// is any token that does not parse to a finite number. No partial result
/// is produced on failure.
///
/// ## Example
///
/// ```rust
/// use sortview_core::{parse_numbers, ParseError};
///
/// assert_eq!(parse_numbers("1, 2, 3").unwrap().as_slice(), &[1.0, 2.0, 3.0]);
/// assert_eq!(parse_numbers("1,2,3").unwrap().as_slice(), &[1.0, 2.0, 3.0]);
/// assert_eq!(parse_numbers("1 2 3").unwrap().as_slice(), &[1.0, 2.0, 3.0]);
/// assert!(matches!(parse_numbers("1, a, 3"), Err(ParseError::InvalidToken { .. })));
/// ```
pub fn parse_numbers(input: &str) -> Result<NumericSequence, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let separator = Separator::infer(input);
    let mut values = Vec::new();

    for (position, raw) in input.split(separator.as_str()).enumerate() {
        let token = raw.trim();
        let value = token
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidToken {
                position,
                token: token.to_string(),
            })?;
        if !value.is_finite() {
            return Err(ParseError::NotFinite {
                position,
                token: token.to_string(),
            });
        }
        values.push(value);
    }

    tracing::trace!(count = values.len(), ?separator, "parsed numeric input");
    Ok(NumericSequence::from_checked(values))
}
