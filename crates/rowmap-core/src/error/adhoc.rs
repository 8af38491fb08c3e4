use super::Error;

/// An error built from a format string, for failures that have no structured
/// kind of their own.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<Box<str>>) -> Self {
        AdhocError {
            message: message.into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from format arguments. Used by the `bail!` and
    /// `err!` macros.
    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message: Box<str> = match args.as_str() {
            Some(s) => s.into(),
            None => args.to_string().into(),
        };

        Error::from(super::ErrorKind::Adhoc(AdhocError::new(message)))
    }
}
