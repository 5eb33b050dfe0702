use super::Error;

/// Error when an insert or update collides with a unique index.
///
/// Get-or-create callers treat this as "somebody else created the row first"
/// and re-read instead of failing.
#[derive(Debug)]
pub(super) struct UniqueViolationError {
    table: Box<str>,
    message: Box<str>,
}

impl std::error::Error for UniqueViolationError {}

impl core::fmt::Display for UniqueViolationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unique constraint violated on `{}`: {}",
            self.table, self.message
        )
    }
}

impl Error {
    pub fn unique_violation(table: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UniqueViolation(UniqueViolationError {
            table: table.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_unique_violation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UniqueViolation(_)))
    }
}
