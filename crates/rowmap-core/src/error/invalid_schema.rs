use super::Error;

/// Error when a schema declaration is invalid.
///
/// This occurs when:
/// - `define_schema` is called with no names, or repeats a name in one call
/// - a name is not a valid identifier
/// - an association targets a model that was never registered
/// - an association's target does not declare the foreign-key attribute
/// - an association name collides with an attribute name
///
/// These errors are reported when the schema is built.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
