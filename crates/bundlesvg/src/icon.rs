//! Icon resolution.
//!
//! The renderer never fetches anything itself: it asks an [`IconResolver`]
//! for the URL of each service's icon and writes that URL into the document.
//! Any `Fn(&str) -> Result<String, IconError>` is a resolver; [`UrlTemplate`]
//! is the resolver used by the command-line tool.

use std::error::Error as StdError;

use thiserror::Error;

use bundlesvg_topology::{CharmRef, CharmRefError};

use crate::config::IconConfig;

const PATH_PLACEHOLDER: &str = "{path}";

/// Error returned by an [`IconResolver`].
#[derive(Debug, Error)]
pub enum IconError {
    /// The icon reference is not a valid charm reference.
    #[error(transparent)]
    Reference(#[from] CharmRefError),

    /// Any other resolver failure.
    #[error(transparent)]
    Other(Box<dyn StdError + Send + Sync>),
}

impl IconError {
    /// Wraps an arbitrary resolver failure.
    pub fn other(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}

/// Maps a service's icon reference to the URL of its icon.
///
/// Implementations are called once per service, synchronously, and are not
/// retried.
pub trait IconResolver {
    /// Resolves `reference` (a charm reference) to an icon URL.
    ///
    /// # Errors
    ///
    /// Returns [`IconError`] if the reference is malformed or no URL can be
    /// produced for it.
    fn resolve(&self, reference: &str) -> Result<String, IconError>;
}

impl<F> IconResolver for F
where
    F: Fn(&str) -> Result<String, IconError>,
{
    fn resolve(&self, reference: &str) -> Result<String, IconError> {
        self(reference)
    }
}

/// Resolves icons by substituting the charm path into a URL template.
///
/// # Examples
///
/// ```
/// use bundlesvg::icon::{IconResolver, UrlTemplate};
///
/// let resolver = UrlTemplate::new("http://0.1.2.3/{path}.svg").unwrap();
/// assert_eq!(
///     resolver.resolve("cs:precise/mongodb-21").unwrap(),
///     "http://0.1.2.3/precise/mongodb-21.svg"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    template: String,
}

impl UrlTemplate {
    /// Creates a resolver from a template containing `{path}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has no `{path}` placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self, String> {
        let template = template.into();
        if !template.contains(PATH_PLACEHOLDER) {
            return Err(format!(
                "icon URL template {template:?} does not contain {PATH_PLACEHOLDER}"
            ));
        }
        Ok(Self { template })
    }

    /// Creates a resolver from the `[icons]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured template has no `{path}` placeholder.
    pub fn from_config(config: &IconConfig) -> Result<Self, String> {
        Self::new(config.url_template())
    }
}

impl IconResolver for UrlTemplate {
    fn resolve(&self, reference: &str) -> Result<String, IconError> {
        let charm: CharmRef = reference.parse()?;
        Ok(self.template.replace(PATH_PLACEHOLDER, &charm.path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_substitutes_path() {
        let resolver = UrlTemplate::new("http://0.1.2.3/{path}.svg").unwrap();
        assert_eq!(
            resolver
                .resolve("cs:~charming-devs/precise/elasticsearch-2")
                .unwrap(),
            "http://0.1.2.3/~charming-devs/precise/elasticsearch-2.svg"
        );
    }

    #[test]
    fn test_template_requires_placeholder() {
        assert!(UrlTemplate::new("http://icons.local/icon.svg").is_err());
    }

    #[test]
    fn test_template_from_default_config() {
        let resolver = UrlTemplate::from_config(&IconConfig::default()).unwrap();
        let url = resolver.resolve("cs:trusty/mysql").unwrap();
        assert!(url.contains("/trusty/mysql/"));
    }

    #[test]
    fn test_malformed_reference() {
        let resolver = UrlTemplate::new("{path}").unwrap();
        let err = resolver.resolve("cs:a/b/c/d").unwrap_err();
        assert!(matches!(err, IconError::Reference(_)));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |reference: &str| -> Result<String, IconError> {
            if reference.is_empty() {
                Err(IconError::other("no reference"))
            } else {
                Ok(format!("icons/{reference}"))
            }
        };

        assert_eq!(resolver.resolve("mysql").unwrap(), "icons/mysql");
        assert_eq!(resolver.resolve("").unwrap_err().to_string(), "no reference");
    }
}
