//! Error types for CDMI reply decoding

use thiserror::Error;

/// CDMI error types
#[derive(Debug, Error)]
pub enum CdmiError {
    /// An allocation could not be satisfied.
    #[error("Out of memory: {0}")]
    OutOfMemory(String),
    /// Reply did not parse or has an unexpected JSON shape.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Reply contains a construct the value model cannot represent.
    #[error("Not supported: {0}")]
    NotSupported(String),
    /// A required member is absent.
    #[error("Not found: {0}")]
    NotFound(String),
    /// A member is present but carries the wrong kind of value.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// A configured limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
}

/// Error kind without the attached context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`CdmiError::OutOfMemory`]
    OutOfMemory,
    /// See [`CdmiError::MalformedInput`]
    MalformedInput,
    /// See [`CdmiError::NotSupported`]
    NotSupported,
    /// See [`CdmiError::NotFound`]
    NotFound,
    /// See [`CdmiError::InvalidValue`]
    InvalidValue,
    /// See [`CdmiError::LimitExceeded`]
    LimitExceeded,
}

impl CdmiError {
    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CdmiError::OutOfMemory(_) => ErrorKind::OutOfMemory,
            CdmiError::MalformedInput(_) => ErrorKind::MalformedInput,
            CdmiError::NotSupported(_) => ErrorKind::NotSupported,
            CdmiError::NotFound(_) => ErrorKind::NotFound,
            CdmiError::InvalidValue(_) => ErrorKind::InvalidValue,
            CdmiError::LimitExceeded(_) => ErrorKind::LimitExceeded,
        }
    }
}

impl From<std::collections::TryReserveError> for CdmiError {
    fn from(err: std::collections::TryReserveError) -> Self {
        CdmiError::OutOfMemory(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CdmiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let cases = vec![
            (CdmiError::OutOfMemory("x".into()), ErrorKind::OutOfMemory),
            (CdmiError::MalformedInput("x".into()), ErrorKind::MalformedInput),
            (CdmiError::NotSupported("x".into()), ErrorKind::NotSupported),
            (CdmiError::NotFound("x".into()), ErrorKind::NotFound),
            (CdmiError::InvalidValue("x".into()), ErrorKind::InvalidValue),
            (CdmiError::LimitExceeded("x".into()), ErrorKind::LimitExceeded),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn test_try_reserve_maps_to_out_of_memory() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(CdmiError::from(err).kind(), ErrorKind::OutOfMemory);
    }
}
