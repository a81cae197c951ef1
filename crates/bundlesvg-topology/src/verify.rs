//! Structural verification of bundles.
//!
//! Verification checks every service and relation, collects all problems
//! found, and on success produces the [`Topology`] the renderer consumes.

use std::collections::HashSet;

use log::{debug, warn};

use crate::{
    bundle::Bundle,
    charm::{CharmRef, is_valid_name, is_valid_series},
    endpoint::Endpoint,
    error::VerificationError,
    topology::{Relation, Service, Topology},
};

impl Bundle {
    /// Verifies the bundle and returns its validated topology.
    ///
    /// The following are reported:
    /// - an invalid default series
    /// - invalid service names, empty or malformed charm references
    /// - relations that do not have exactly two endpoints
    /// - malformed endpoints, or endpoints naming services not in the bundle
    /// - relations from a service to itself
    /// - relations defined more than once (in either direction)
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] holding every problem found.
    pub fn verify(&self) -> Result<Topology, VerificationError> {
        let mut errors = Vec::new();

        if let Some(series) = self.series.as_deref().filter(|s| !is_valid_series(s)) {
            errors.push(format!("bundle declares an invalid series {series:?}"));
        }

        let mut services = Vec::with_capacity(self.services.len());
        for (name, spec) in &self.services {
            if !is_valid_name(name) {
                errors.push(format!("invalid service name {name:?}"));
            }
            if spec.charm.is_empty() {
                errors.push(format!("empty charm path in service {name:?}"));
            } else if let Err(err) = spec.charm.parse::<CharmRef>() {
                errors.push(format!("invalid charm URL in service {name:?}: {err}"));
            }
            services.push(Service::new(
                name.clone(),
                spec.charm.clone(),
                spec.annotations.clone(),
            ));
        }

        let mut relations = Vec::with_capacity(self.relations.len());
        let mut seen = HashSet::new();
        for raw in &self.relations {
            let Some(relation) = self.verify_relation(raw, &mut errors) else {
                continue;
            };

            let (first, second) = relation.canonical();
            if !seen.insert((first.clone(), second.clone())) {
                errors.push(format!("relation {relation} is defined more than once"));
                continue;
            }
            relations.push(relation);
        }

        if !errors.is_empty() {
            warn!(problems = errors.len(); "Bundle verification failed");
            return Err(VerificationError::new(errors));
        }

        debug!(
            services = services.len(),
            relations = relations.len();
            "Bundle verified"
        );
        Ok(Topology::new(services, relations))
    }

    fn verify_relation(&self, raw: &[String], errors: &mut Vec<String>) -> Option<Relation> {
        let [first, second] = raw else {
            errors.push(format!(
                "relation {raw:?} has {} endpoint(s), not 2",
                raw.len()
            ));
            return None;
        };

        let mut parsed = Vec::with_capacity(2);
        for endpoint in [first, second] {
            match endpoint.parse::<Endpoint>() {
                Ok(endpoint) => parsed.push(endpoint),
                Err(err) => errors.push(err.to_string()),
            }
        }
        let [first, second]: [Endpoint; 2] = parsed.try_into().ok()?;

        let mut known = true;
        for endpoint in [&first, &second] {
            if !self.services.contains_key(endpoint.service()) {
                errors.push(format!(
                    "relation {raw:?} refers to service {:?} not defined in this bundle",
                    endpoint.service()
                ));
                known = false;
            }
        }
        if !known {
            return None;
        }

        if first.service() == second.service() {
            errors.push(format!("relation {raw:?} relates a service to itself"));
            return None;
        }

        Some(Relation::new(first, second))
    }
}
