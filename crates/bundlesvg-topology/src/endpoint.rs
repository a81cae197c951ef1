//! Relation endpoints of the form `service[:relation]`.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::charm::is_valid_name;

static RELATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*([_-][a-z0-9]+)*$").expect("valid relation regex")
});

/// Error produced when an endpoint string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid relation syntax {0:?}")]
pub struct EndpointError(pub String);

/// One side of a relation: a service and, optionally, the named connection
/// point on that service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint {
    service: String,
    relation: Option<String>,
}

impl Endpoint {
    /// Creates an endpoint without validating the names.
    pub fn new(service: impl Into<String>, relation: Option<String>) -> Self {
        Self {
            service: service.into(),
            relation,
        }
    }

    /// Name of the service this endpoint belongs to
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Named connection point, if the bundle specified one
    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.relation {
            Some(relation) => write!(f, "{}:{relation}", self.service),
            None => f.write_str(&self.service),
        }
    }
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (service, relation) = match s.split_once(':') {
            Some((service, relation)) => {
                if !RELATION_RE.is_match(relation) {
                    return Err(EndpointError(s.to_string()));
                }
                (service, Some(relation.to_string()))
            }
            None => (s, None),
        };

        if !is_valid_name(service) {
            return Err(EndpointError(s.to_string()));
        }

        Ok(Self::new(service, relation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_relation() {
        let endpoint: Endpoint = "charmworld:essearch".parse().unwrap();
        assert_eq!(endpoint.service(), "charmworld");
        assert_eq!(endpoint.relation(), Some("essearch"));
        assert_eq!(endpoint.to_string(), "charmworld:essearch");
    }

    #[test]
    fn test_parse_service_only() {
        let endpoint: Endpoint = "mongodb".parse().unwrap();
        assert_eq!(endpoint.service(), "mongodb");
        assert_eq!(endpoint.relation(), None);
        assert_eq!(endpoint.to_string(), "mongodb");
    }

    #[test]
    fn test_relation_names_with_separators() {
        let endpoint: Endpoint = "wordpress:db-admin_2".parse().unwrap();
        assert_eq!(endpoint.relation(), Some("db-admin_2"));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", ":db", "mongodb:", "mongodb:Database", "Mongo:db", "a:b:c"] {
            let err = bad.parse::<Endpoint>().unwrap_err();
            assert_eq!(err, EndpointError(bad.to_string()), "input {bad:?}");
        }
    }
}
