use super::Error;

/// Error when an attribute name is not part of a model's declared schema.
///
/// Raised by `get` for any undeclared name, and by `set` or row
/// materialization when the model is strict.
#[derive(Debug)]
pub(super) struct UnknownAttribute {
    model: Box<str>,
    attribute: Box<str>,
}

impl std::error::Error for UnknownAttribute {}

impl core::fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown attribute `{}` on model `{}`",
            self.attribute, self.model
        )
    }
}

impl Error {
    /// Creates an unknown attribute error.
    pub fn unknown_attribute(model: impl Into<String>, attribute: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAttribute(UnknownAttribute {
            model: model.into().into(),
            attribute: attribute.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown attribute error.
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownAttribute(_))
    }
}
