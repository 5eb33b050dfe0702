use super::Error;

/// Error when a value fails validation before it reaches storage.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) field: &'static str,
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// String length constraint violation
    Length {
        value_len: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    /// Integer range constraint violation
    Range { value: i64, min: i64, max: i64 },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid `{}`: ", self.field)?;

        match self.kind {
            ValidationErrorKind::Length {
                value_len,
                min,
                max,
            } => {
                if let Some(min) = min.filter(|min| value_len < *min) {
                    write!(
                        f,
                        "value length {} is too short (minimum: {})",
                        value_len, min
                    )
                } else if let Some(max) = max.filter(|max| value_len > *max) {
                    write!(
                        f,
                        "value length {} is too long (maximum: {})",
                        value_len, max
                    )
                } else {
                    f.write_str("length constraint violation")
                }
            }
            ValidationErrorKind::Range { value, min, max } => {
                write!(f, "value {} is out of range ({}..={})", value, min, max)
            }
        }
    }
}

impl Error {
    pub fn validation_length(
        field: &'static str,
        value_len: usize,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            field,
            kind: ValidationErrorKind::Length {
                value_len,
                min,
                max,
            },
        }))
    }

    pub fn validation_range(field: &'static str, value: i64, min: i64, max: i64) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            field,
            kind: ValidationErrorKind::Range { value, min, max },
        }))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
