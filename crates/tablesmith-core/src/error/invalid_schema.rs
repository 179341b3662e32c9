use super::Error;

/// Error when a table description cannot be assembled.
///
/// This occurs when:
/// - Two columns share a name
/// - A table or column name is empty
///
/// These errors are raised by [`crate::schema::TableBuilder::build`], before
/// any generator runs.
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

    /// Returns `true` if this error, or any error in its context chain, is an
    /// invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidSchema(_)))
    }
}
