//! Bundle reading and verification for bundlesvg.
//!
//! A bundle describes a set of services, the charms they run, free-form
//! annotations (such as canvas positions) and the relations between them.
//! This crate:
//!
//! - reads bundles from YAML ([`read_bundle`])
//! - parses charm references and relation endpoints ([`CharmRef`], [`Endpoint`])
//! - verifies a bundle and produces the validated [`Topology`] ([`Bundle::verify`])
//!
//! # Example
//!
//! ```
//! let source = r#"
//! services:
//!   wordpress:
//!     charm: cs:trusty/wordpress
//!   mysql:
//!     charm: cs:trusty/mysql
//! relations:
//!   - ["wordpress:db", "mysql:db"]
//! "#;
//!
//! let bundle = bundlesvg_topology::read_bundle(source).unwrap();
//! let topology = bundle.verify().unwrap();
//! assert_eq!(topology.relations().len(), 1);
//! ```

mod bundle;
mod charm;
mod endpoint;
mod topology;
mod verify;

pub mod error;

pub use bundle::{Bundle, ServiceSpec, read_bundle};
pub use charm::{CharmRef, CharmRefError, Schema};
pub use endpoint::{Endpoint, EndpointError};
pub use error::{ReadError, VerificationError};
pub use topology::{Relation, Service, Topology};
