use super::Error;

/// Error when an expression node is built without a required operand.
///
/// This occurs when:
/// - A LIKE predicate is built without its value operand
/// - A LIKE predicate is built without its pattern operand
///
/// A parser should treat this as an internal invariant violation rather than
/// a syntax error, as the grammar already guarantees the operands exist.
#[derive(Debug)]
pub(super) struct InvalidConstruction {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidConstruction {}

impl core::fmt::Display for InvalidConstruction {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid construction: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid construction error.
    ///
    /// The message should name the missing operand, e.g. `"value is missing"`.
    pub fn invalid_construction(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConstruction(InvalidConstruction {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid construction error.
    pub fn is_invalid_construction(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConstruction(_))
    }
}
