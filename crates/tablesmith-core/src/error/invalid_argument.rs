use super::Error;

/// Error when a caller breaks the contract of a generator call.
///
/// This occurs when:
/// - A table without any column is handed to a generator
/// - A field list an archetype structurally needs is empty (criteria for a
///   select-by procedure, search fields for a search procedure)
/// - An enum projection is requested over a column of the wrong type
///
/// Nothing is emitted when this error is returned.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    message: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is a
    /// caller contract violation. Unknown column references count as one.
    pub fn is_invalid_argument(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                err.kind(),
                super::ErrorKind::InvalidArgument(_) | super::ErrorKind::UnknownColumn(_)
            )
        })
    }
}
