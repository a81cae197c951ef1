//! The validated topology handed to the renderer.
//!
//! A [`Topology`] is only produced by [`Bundle::verify`](crate::Bundle::verify)
//! or assembled by hand through [`Topology::new`]; it keeps services in source
//! order and relations with their endpoints already parsed.

use std::fmt;

use indexmap::IndexMap;

use crate::endpoint::Endpoint;

/// A service of the topology.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    name: String,
    charm: String,
    annotations: IndexMap<String, String>,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        charm: impl Into<String>,
        annotations: IndexMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            charm: charm.into(),
            annotations,
        }
    }

    /// Unique name of the service
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Charm reference, used as the icon reference
    pub fn charm(&self) -> &str {
        &self.charm
    }

    /// Annotation lookup table
    pub fn annotations(&self) -> &IndexMap<String, String> {
        &self.annotations
    }
}

/// An unordered connection between two service endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    endpoints: [Endpoint; 2],
}

impl Relation {
    pub fn new(first: Endpoint, second: Endpoint) -> Self {
        Self {
            endpoints: [first, second],
        }
    }

    /// Endpoints in the order the bundle lists them
    pub fn endpoints(&self) -> &[Endpoint; 2] {
        &self.endpoints
    }

    /// The endpoint pair in canonical order, so `a-b` and `b-a` compare equal.
    pub fn canonical(&self) -> (&Endpoint, &Endpoint) {
        let [first, second] = &self.endpoints;
        if first <= second {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = &self.endpoints;
        write!(f, "[{first} {second}]")
    }
}

/// A validated service topology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    services: IndexMap<String, Service>,
    relations: Vec<Relation>,
}

impl Topology {
    /// Assembles a topology from services and relations.
    ///
    /// No checks are made; services sharing a name keep the last entry.
    pub fn new(
        services: impl IntoIterator<Item = Service>,
        relations: impl IntoIterator<Item = Relation>,
    ) -> Self {
        Self {
            services: services
                .into_iter()
                .map(|service| (service.name.clone(), service))
                .collect(),
            relations: relations.into_iter().collect(),
        }
    }

    /// Services in source order
    pub fn services(&self) -> impl ExactSizeIterator<Item = &Service> {
        self.services.values()
    }

    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }

    /// Relations in source order
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }
}
