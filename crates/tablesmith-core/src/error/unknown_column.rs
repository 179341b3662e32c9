use super::Error;

/// Error when a field list names a column the table does not have.
#[derive(Debug)]
pub(super) struct UnknownColumn {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for UnknownColumn {}

impl core::fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown column: table `{}` has no column `{}`",
            self.table, self.column
        )
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumn {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is an
    /// unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnknownColumn(_)))
    }
}
