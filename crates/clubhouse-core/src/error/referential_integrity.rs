use super::Error;

/// Error when a write would break a foreign key, most commonly deleting a
/// row that other rows still reference through a protecting foreign key.
#[derive(Debug)]
pub(super) struct ReferentialIntegrityError {
    table: Box<str>,
    message: Box<str>,
}

impl std::error::Error for ReferentialIntegrityError {}

impl core::fmt::Display for ReferentialIntegrityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "referential integrity violated on `{}`: {}",
            self.table, self.message
        )
    }
}

impl Error {
    pub fn referential_integrity(table: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ReferentialIntegrity(
            ReferentialIntegrityError {
                table: table.into().into(),
                message: message.into().into(),
            },
        ))
    }

    pub fn is_referential_integrity(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ReferentialIntegrity(_)))
    }
}
