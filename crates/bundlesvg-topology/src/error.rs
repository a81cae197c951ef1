//! Error types for reading and verifying bundles.

use std::fmt;

use thiserror::Error;

/// Error returned when bundle source cannot be read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot parse bundle: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Error type for bundle verification.
///
/// Verification does not stop at the first problem; every defect found is
/// kept, in the order it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationError {
    errors: Vec<String>,
}

impl VerificationError {
    /// Create a new verification error from the collected problems.
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Get all problems in this error.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.errors.first() {
            write!(f, "{first}")?;
            if self.errors.len() > 1 {
                write!(f, " (+{} more)", self.errors.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for VerificationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single() {
        let err = VerificationError::new(vec!["unknown service".to_string()]);
        assert_eq!(err.to_string(), "unknown service");
    }

    #[test]
    fn test_display_multiple() {
        let err = VerificationError::new(vec![
            "first problem".to_string(),
            "second problem".to_string(),
            "third problem".to_string(),
        ]);
        assert_eq!(err.to_string(), "first problem (+2 more)");
        assert_eq!(err.errors().len(), 3);
    }
}
