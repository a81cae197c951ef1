//! Error adapter for converting BundleSvgError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! Bundle verification collects every problem it finds. When a
//! [`BundleSvgError::InvalidTopology`] carries several problems, each one is
//! rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use bundlesvg::BundleSvgError;

const INVALID_TOPOLOGY: &str = "bundlesvg::invalid_topology";

/// Adapter for a single bundle verification problem.
#[derive(Debug)]
pub struct ProblemAdapter<'a> {
    problem: &'a str,
}

impl<'a> ProblemAdapter<'a> {
    pub fn new(problem: &'a str) -> Self {
        Self { problem }
    }
}

impl fmt::Display for ProblemAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot verify bundle: {}", self.problem)
    }
}

impl std::error::Error for ProblemAdapter<'_> {}

impl MietteDiagnostic for ProblemAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(INVALID_TOPOLOGY))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "every relation must join two distinct services defined in the bundle",
        ))
    }
}

/// Adapter for every other [`BundleSvgError`].
pub struct ErrorAdapter<'a>(pub &'a BundleSvgError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BundleSvgError::Io(_) => "bundlesvg::io",
            BundleSvgError::Read(_) => "bundlesvg::read",
            BundleSvgError::Config(_) => "bundlesvg::config",
            BundleSvgError::InvalidTopology(_) => INVALID_TOPOLOGY,
            BundleSvgError::InvalidPosition { .. } => "bundlesvg::invalid_position",
            BundleSvgError::UnknownNode { .. } => "bundlesvg::unknown_node",
            BundleSvgError::IconResolutionFailed { .. } => "bundlesvg::icon_resolution",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            BundleSvgError::Read(_) => "the input must be a YAML bundle with a `services` mapping",
            BundleSvgError::InvalidPosition { .. } => {
                "annotate the service with numeric `gui-x` and `gui-y` values, \
                 or set the keys under [position] in the configuration"
            }
            BundleSvgError::IconResolutionFailed { .. } => {
                "check the service's charm reference and the icon URL template"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One problem found while verifying the bundle.
    Problem(ProblemAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Problem(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Problem(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Problem(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Problem(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert a [`BundleSvgError`] into a list of reportable errors.
///
/// For [`BundleSvgError::InvalidTopology`], this returns one [`Reportable`]
/// for each verification problem. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &BundleSvgError) -> Vec<Reportable<'_>> {
    match err {
        BundleSvgError::InvalidTopology(verification) if !verification.errors().is_empty() => {
            verification
                .errors()
                .iter()
                .map(|problem| Reportable::Problem(ProblemAdapter::new(problem)))
                .collect()
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
