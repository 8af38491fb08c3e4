use super::Error;

/// Error when an association is accessed on a record that has no primary key
/// value yet.
///
/// The related collection is keyed by the owner's identity, so there is no
/// collection to load until the owner has one.
#[derive(Debug)]
pub(super) struct UnresolvedOwner {
    model: Box<str>,
    association: Box<str>,
}

impl std::error::Error for UnresolvedOwner {}

impl core::fmt::Display for UnresolvedOwner {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot load `{}.{}`: owner has no primary key value",
            self.model, self.association
        )
    }
}

impl Error {
    /// Creates an unresolved owner error.
    pub fn unresolved_owner(model: impl Into<String>, association: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedOwner(UnresolvedOwner {
            model: model.into().into(),
            association: association.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved owner error.
    pub fn is_unresolved_owner(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedOwner(_))
    }
}
