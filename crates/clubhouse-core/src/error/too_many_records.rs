use super::Error;

/// Error when a query expected at most one record and found more.
#[derive(Debug)]
pub(super) struct TooManyRecordsError {
    context: Box<str>,
}

impl std::error::Error for TooManyRecordsError {}

impl core::fmt::Display for TooManyRecordsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "too many records: {}", self.context)
    }
}

impl Error {
    pub fn too_many_records(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TooManyRecords(TooManyRecordsError {
            context: context.into().into(),
        }))
    }
}
