use super::Error;

/// Error when a row store operation fails.
///
/// This wraps whatever the store's backend reported: connectivity errors,
/// malformed queries, decoding failures.
#[derive(Debug)]
pub(super) struct StoreFailure {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StoreFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("store failure: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a row store failure.
    ///
    /// Store implementations use this to convert backend-specific errors into
    /// rowmap errors.
    pub fn store_failure(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::StoreFailure(StoreFailure {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a row store failure.
    pub fn is_store_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::StoreFailure(_))
    }
}
