//! Example: Rendering a topology built in code
//!
//! This example assembles a three-service topology by hand, without reading
//! a bundle, and prints the rendered SVG document to stdout.

use std::io;

use indexmap::IndexMap;

use bundlesvg::{
    DiagramBuilder, Endpoint, Relation, Service, Topology,
    config::AppConfig,
    icon::{IconResolver, UrlTemplate},
};

fn service(name: &str, charm: &str, x: f64, y: f64) -> Service {
    let annotations = IndexMap::from([
        ("gui-x".to_string(), x.to_string()),
        ("gui-y".to_string(), y.to_string()),
    ]);
    Service::new(name, charm, annotations)
}

fn relation(first: &str, second: &str) -> Result<Relation, Box<dyn std::error::Error>> {
    Ok(Relation::new(first.parse::<Endpoint>()?, second.parse()?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let topology = Topology::new(
        [
            service("haproxy", "cs:trusty/haproxy-12", 100.0, 0.0),
            service("wordpress", "cs:trusty/wordpress-4", 100.0, 250.0),
            service("mysql", "cs:trusty/mysql-29", 400.0, 250.0),
        ],
        [
            relation("haproxy:reverseproxy", "wordpress:website")?,
            relation("wordpress:db", "mysql:db")?,
        ],
    );

    let resolver = UrlTemplate::new("https://icons.example.com/{path}.svg")?;
    eprintln!(
        "Resolving icons, e.g. {}",
        resolver.resolve("cs:trusty/mysql-29")?
    );

    let diagram = DiagramBuilder::new(AppConfig::default()).render_topology(&topology, &resolver)?;
    diagram.serialize(io::stdout().lock())?;

    Ok(())
}
