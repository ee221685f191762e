use thiserror::Error;

/// Why a numeric literal was rejected.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumberError {
    #[error("the first character of a number must be one of [0-9+-.], got {0:?}")]
    InvalidStart(char),
    #[error("there must be at least one digit following the decimal point")]
    MissingFractionDigits,
    #[error("there must be at least one digit following the exponent marker")]
    MissingExponentDigits,
}

/// Errors which can occur when parsing path data.
///
/// Positions are byte offsets into the parsed string.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Byte {position}: Expected move-to command, got {command:?}.")]
    MissingMoveTo { command: char, position: usize },
    #[error("Byte {position}: Invalid command {command:?}.")]
    Command { command: char, position: usize },
    #[error("Byte {position}: Invalid number, {reason}.")]
    Number { reason: NumberError, position: usize },
    #[error("Byte {position}: Numeric overflow.")]
    Overflow { position: usize },
    #[error("Byte {position}: Exponent {exponent} is out of range.")]
    Exponent { exponent: f64, position: usize },
    #[error("Byte {position}: Expected flag (0/1), got {src:?}.")]
    Flag { src: char, position: usize },
    #[error("Byte {position}: Unexpected end of path data.")]
    UnexpectedEnd { position: usize },
}

/// The parsing stage an error comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A missing or unexpected command letter, or input ending too early.
    Structural,
    /// A malformed or out of range number, or an invalid arc flag.
    Numeric,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingMoveTo { .. }
            | ParseError::Command { .. }
            | ParseError::UnexpectedEnd { .. } => ErrorKind::Structural,
            ParseError::Number { .. }
            | ParseError::Overflow { .. }
            | ParseError::Exponent { .. }
            | ParseError::Flag { .. } => ErrorKind::Numeric,
        }
    }

    /// Byte offset at which the error was detected.
    pub fn position(&self) -> usize {
        match *self {
            ParseError::MissingMoveTo { position, .. }
            | ParseError::Command { position, .. }
            | ParseError::Number { position, .. }
            | ParseError::Overflow { position }
            | ParseError::Exponent { position, .. }
            | ParseError::Flag { position, .. }
            | ParseError::UnexpectedEnd { position } => position,
        }
    }
}

#[test]
fn messages() {
    let err = ParseError::Number {
        reason: NumberError::InvalidStart('*'),
        position: 4,
    };
    assert_eq!(
        err.to_string(),
        "Byte 4: Invalid number, the first character of a number must be one of [0-9+-.], got '*'."
    );
    assert_eq!(err.kind(), ErrorKind::Numeric);
    assert_eq!(err.position(), 4);

    let err = ParseError::MissingMoveTo {
        command: 'L',
        position: 0,
    };
    assert_eq!(err.to_string(), "Byte 0: Expected move-to command, got 'L'.");
    assert_eq!(err.kind(), ErrorKind::Structural);
}
