use super::Error;

/// Error when an association accessor names an association the model never
/// declared with `has_many`.
#[derive(Debug)]
pub(super) struct UnknownAssociation {
    model: Box<str>,
    association: Box<str>,
}

impl std::error::Error for UnknownAssociation {}

impl core::fmt::Display for UnknownAssociation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown association `{}` on model `{}`",
            self.association, self.model
        )
    }
}

impl Error {
    /// Creates an unknown association error.
    pub fn unknown_association(
        model: impl Into<String>,
        association: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnknownAssociation(UnknownAssociation {
            model: model.into().into(),
            association: association.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown association error.
    pub fn is_unknown_association(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownAssociation(_))
    }
}
