use super::Error;

/// Error when a model name does not resolve.
///
/// Raised when a record is requested for a model that was never registered,
/// or when a typed model is loaded from a record of a different model.
#[derive(Debug)]
pub(super) struct UnknownModel {
    name: Box<str>,
}

impl std::error::Error for UnknownModel {}

impl core::fmt::Display for UnknownModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown model `{}`", self.name)
    }
}

impl Error {
    /// Creates an unknown model error.
    pub fn unknown_model(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownModel(UnknownModel {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown model error.
    pub fn is_unknown_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownModel(_))
    }
}
