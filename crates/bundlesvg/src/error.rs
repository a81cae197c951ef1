//! Error types for bundlesvg operations.
//!
//! This module provides the main error type [`BundleSvgError`] and the
//! [`Stage`] of the render pipeline each failure belongs to.

use std::{fmt, io};

use thiserror::Error;

use bundlesvg_topology::{ReadError, VerificationError};

use crate::icon::IconError;

/// Stages of a render, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Validating,
    Parsing,
    Normalizing,
    Placing,
    Routing,
    Assembling,
}

impl Stage {
    /// Returns a lowercase name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Parsing => "parsing",
            Self::Normalizing => "normalizing",
            Self::Placing => "placing",
            Self::Routing => "routing",
            Self::Assembling => "assembling",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The main error type for bundlesvg operations.
///
/// Every render failure is terminal: no partial document is produced.
#[derive(Debug, Error)]
pub enum BundleSvgError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The bundle failed structural verification.
    #[error("cannot verify bundle: {0}")]
    InvalidTopology(#[from] VerificationError),

    /// A service's position annotations are missing, empty, or not finite
    /// numbers.
    #[error("service {service:?} does not have a valid position")]
    InvalidPosition { service: String, stage: Stage },

    /// A relation names a service that is not part of the topology.
    #[error("relation {relation} refers to unknown service {service:?}")]
    UnknownNode { relation: String, service: String },

    /// The icon resolver failed for a service.
    #[error("cannot resolve icon for service {service:?}: {source}")]
    IconResolutionFailed {
        service: String,
        #[source]
        source: IconError,
    },
}

impl BundleSvgError {
    /// Returns the render stage this error terminated, if it came from a render.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesvg::{BundleSvgError, Stage};
    ///
    /// let err = BundleSvgError::UnknownNode {
    ///     relation: "[a b]".to_string(),
    ///     service: "b".to_string(),
    /// };
    /// assert_eq!(err.stage(), Some(Stage::Routing));
    /// ```
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::InvalidTopology(_) => Some(Stage::Validating),
            Self::InvalidPosition { stage, .. } => Some(*stage),
            Self::IconResolutionFailed { .. } => Some(Stage::Placing),
            Self::UnknownNode { .. } => Some(Stage::Routing),
            Self::Io(_) | Self::Read(_) | Self::Config(_) => None,
        }
    }

    pub(crate) fn invalid_position(service: impl Into<String>, stage: Stage) -> Self {
        Self::InvalidPosition {
            service: service.into(),
            stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_position_message() {
        let err = BundleSvgError::invalid_position("charmworld", Stage::Parsing);
        assert_eq!(
            err.to_string(),
            r#"service "charmworld" does not have a valid position"#
        );
        assert_eq!(err.stage(), Some(Stage::Parsing));
    }

    #[test]
    fn test_invalid_topology_message() {
        let err = BundleSvgError::from(VerificationError::new(vec![
            "relation refers to service \"ghost\"".to_string(),
        ]));
        assert!(err.to_string().starts_with("cannot verify bundle: "));
        assert_eq!(err.stage(), Some(Stage::Validating));
    }

    #[test]
    fn test_stage_order() {
        assert!(Stage::Validating < Stage::Parsing);
        assert!(Stage::Placing < Stage::Routing);
        assert_eq!(Stage::Normalizing.to_string(), "normalizing");
    }

    #[test]
    fn test_non_render_errors_have_no_stage() {
        let err = BundleSvgError::Config("bad".to_string());
        assert_eq!(err.stage(), None);
    }
}
