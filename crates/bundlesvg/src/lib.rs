//! bundlesvg - Render service topology bundles as static SVG documents.
//!
//! A bundle names a set of services, each carrying a charm reference and a
//! canvas position in its annotations, and the relations between them. The
//! renderer verifies the bundle, lays every service icon out on a canvas
//! sized to fit, draws one line per relation, and writes the result as SVG.
//!
//! Icon URLs come from a caller-supplied [`IconResolver`](icon::IconResolver);
//! nothing is fetched.

pub mod config;
pub mod icon;

mod error;
mod export;
mod node;
mod normalize;
mod place;
mod position;
mod route;

pub use bundlesvg_core::{color, draw, geometry};
pub use bundlesvg_topology::{
    Bundle, CharmRef, Endpoint, ReadError, Relation, Service, ServiceSpec, Topology,
    VerificationError, read_bundle,
};

pub use error::{BundleSvgError, Stage};
pub use export::Diagram;

use log::{debug, info};

use config::AppConfig;
use icon::IconResolver;
use node::{Node, NodeSet};
use normalize::normalize;
use place::place_icon;
use position::parse_position;
use route::RelationRouter;

/// Builder for reading bundles and rendering them as diagrams.
///
/// A render runs through the [`Stage`]s in order and stops at the first
/// failure; no partial diagram is ever returned.
///
/// # Examples
///
/// ```rust
/// use bundlesvg::{DiagramBuilder, config::AppConfig, icon::IconError};
///
/// let source = r#"
/// services:
///   wordpress:
///     charm: cs:trusty/wordpress
///     annotations:
///       gui-x: 100
///       gui-y: 100
///   mysql:
///     charm: cs:trusty/mysql
///     annotations:
///       gui-x: 400
///       gui-y: 100
/// relations:
///   - ["wordpress:db", "mysql:db"]
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let bundle = builder.read(source).expect("Failed to read bundle");
///
/// let resolver = |reference: &str| -> Result<String, IconError> {
///     Ok(format!("icons/{reference}.svg"))
/// };
/// let diagram = builder
///     .render(&bundle, &resolver)
///     .expect("Failed to render bundle");
///
/// let mut svg = Vec::new();
/// diagram.serialize(&mut svg).expect("Failed to write");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Read a bundle from YAML source.
    ///
    /// The bundle is not verified; [`render`](Self::render) does that.
    ///
    /// # Errors
    ///
    /// Returns [`BundleSvgError::Read`] if the source is not a bundle.
    pub fn read(&self, source: &str) -> Result<Bundle, BundleSvgError> {
        info!("Reading bundle");
        Ok(read_bundle(source)?)
    }

    /// Verify a bundle and render it.
    ///
    /// # Errors
    ///
    /// Returns [`BundleSvgError::InvalidTopology`] if the bundle fails
    /// verification, or any error of [`render_topology`](Self::render_topology).
    pub fn render<R>(&self, bundle: &Bundle, resolver: &R) -> Result<Diagram, BundleSvgError>
    where
        R: IconResolver + ?Sized,
    {
        info!(stage = Stage::Validating.name(); "Verifying bundle");
        let topology = bundle.verify()?;
        debug!(services = topology.services().len(); "Bundle verified");

        self.render_topology(&topology, resolver)
    }

    /// Render an already validated topology.
    ///
    /// # Errors
    ///
    /// - [`BundleSvgError::Config`] if the configured relation style is invalid.
    /// - [`BundleSvgError::InvalidPosition`] if a service has no usable position.
    /// - [`BundleSvgError::IconResolutionFailed`] if `resolver` fails for a service.
    /// - [`BundleSvgError::UnknownNode`] if a relation names a missing service.
    pub fn render_topology<R>(
        &self,
        topology: &Topology,
        resolver: &R,
    ) -> Result<Diagram, BundleSvgError>
    where
        R: IconResolver + ?Sized,
    {
        let layout = self.config.layout();
        let stroke = self
            .config
            .style()
            .relation_stroke()
            .map_err(BundleSvgError::Config)?;

        info!(stage = Stage::Parsing.name(); "Reading service positions");
        let positions = topology
            .services()
            .map(|service| {
                parse_position(service.name(), service.annotations(), self.config.position())
                    .map(|point| (service.name(), point))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(stage = Stage::Normalizing.name(); "Normalizing canvas");
        let normalization = normalize(&positions, layout.icon_size().get());
        let canvas = normalization.canvas();

        let nodes: NodeSet<'_> = topology
            .services()
            .zip(&positions)
            .map(|(service, (name, raw))| {
                let node = Node::new(*name, service.charm(), normalization.apply(*raw));
                (*name, node)
            })
            .collect();

        info!(stage = Stage::Placing.name(), services = nodes.len(); "Placing icons");
        let services = nodes
            .values()
            .map(|node| place_icon(node, canvas.icon(), resolver))
            .collect::<Result<Vec<_>, _>>()?;

        info!(stage = Stage::Routing.name(), relations = topology.relations().len(); "Routing relations");
        let router = RelationRouter::new(canvas.icon(), layout.relation_endpoints(), stroke);
        let relations = topology
            .relations()
            .iter()
            .map(|relation| router.route(relation, &nodes))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            stage = Stage::Assembling.name(),
            width = canvas.width(),
            height = canvas.height();
            "Diagram assembled"
        );
        Ok(Diagram::new(canvas, relations, services))
    }
}

/// Verify and render `bundle` with the default configuration.
///
/// # Errors
///
/// See [`DiagramBuilder::render`].
pub fn new_from_bundle<R>(bundle: &Bundle, resolver: &R) -> Result<Diagram, BundleSvgError>
where
    R: IconResolver + ?Sized,
{
    DiagramBuilder::default().render(bundle, resolver)
}
