//! Decoding limits and configuration

use crate::error::{CdmiError, Result};

/// Limits applied while decoding a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of a converted document (default: 128, hard: 4,096)
    pub max_depth: usize,
    /// Maximum reply buffer length in bytes (default: 64 MiB, hard: 1 GiB)
    pub max_document_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_document_bytes: 64 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_depth: 4_096,
            max_document_bytes: 1024 * 1024 * 1024,
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_depth == 0 {
            return Err(CdmiError::LimitExceeded(
                "max_depth must be at least 1".to_string(),
            ));
        }

        if self.max_depth > hard.max_depth {
            return Err(CdmiError::LimitExceeded(format!(
                "max_depth {} exceeds hard limit {}",
                self.max_depth, hard.max_depth
            )));
        }

        if self.max_document_bytes > hard.max_document_bytes {
            return Err(CdmiError::LimitExceeded(format!(
                "max_document_bytes {} exceeds hard limit {}",
                self.max_document_bytes, hard.max_document_bytes
            )));
        }

        Ok(())
    }

    /// Reject a reply buffer longer than `max_document_bytes`
    pub fn check_document_len(&self, len: usize) -> Result<()> {
        if len > self.max_document_bytes {
            return Err(CdmiError::LimitExceeded(format!(
                "reply of {} bytes exceeds max_document_bytes {}",
                len, self.max_document_bytes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_limits_are_valid() {
        assert!(Limits::default().validate().is_ok());
        assert!(Limits::hard_maximums().validate().is_ok());
    }

    #[test]
    fn test_limits_above_hard_maximum_rejected() {
        let limits = Limits {
            max_depth: 5_000,
            ..Limits::default()
        };
        assert_eq!(
            limits.validate().unwrap_err().kind(),
            ErrorKind::LimitExceeded
        );

        let limits = Limits {
            max_document_bytes: usize::MAX,
            ..Limits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let limits = Limits {
            max_depth: 0,
            ..Limits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_check_document_len() {
        let limits = Limits {
            max_document_bytes: 16,
            ..Limits::default()
        };
        assert!(limits.check_document_len(16).is_ok());
        assert!(limits.check_document_len(17).is_err());
    }
}
