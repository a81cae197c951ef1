//! Integration tests reading bundle YAML and verifying it.

use bundlesvg_topology::{Service, read_bundle};

const BUNDLE: &str = r#"
services:
  mongodb:
    charm: "cs:precise/mongodb-21"
    num_units: 1
    annotations:
      "gui-x": "940.5"
      "gui-y": "388.7698359714502"
    constraints: "mem=2G cpu-cores=1"
  elasticsearch:
    charm: "cs:~charming-devs/precise/elasticsearch-2"
    num_units: 1
    annotations:
      "gui-x": "490.5"
      "gui-y": "369.7698359714502"
    constraints: "mem=2G cpu-cores=1"
  charmworld:
    charm: "cs:~juju-jitsu/precise/charmworld-58"
    num_units: 1
    expose: true
    annotations:
      "gui-x": "813.5"
      "gui-y": "112.23016402854975"
    options:
      charm_import_limit: -1
      source: "lp:~bac/charmworld/ingest-local-charms"
      revno: 511
relations:
  - - "charmworld:essearch"
    - "elasticsearch:essearch"
  - - "charmworld:database"
    - "mongodb:database"
series: precise
"#;

#[test]
fn test_reference_bundle_verifies() {
    let bundle = read_bundle(BUNDLE).expect("Failed to read bundle");
    let topology = bundle.verify().expect("Bundle should verify");

    let names: Vec<&str> = topology.services().map(Service::name).collect();
    assert_eq!(names, ["mongodb", "elasticsearch", "charmworld"]);

    let charmworld = topology.service("charmworld").unwrap();
    assert_eq!(charmworld.charm(), "cs:~juju-jitsu/precise/charmworld-58");
    assert_eq!(charmworld.annotations()["gui-y"], "112.23016402854975");

    let relations: Vec<String> = topology.relations().iter().map(|r| r.to_string()).collect();
    assert_eq!(
        relations,
        [
            "[charmworld:essearch elasticsearch:essearch]",
            "[charmworld:database mongodb:database]",
        ]
    );
}

#[test]
fn test_reference_bundle_with_unknown_service_fails() {
    let mut bundle = read_bundle(BUNDLE).expect("Failed to read bundle");
    bundle.relations[0][0] = "evil-unknown-service".to_string();

    let err = bundle.verify().unwrap_err();
    assert_eq!(err.errors().len(), 1);
    assert!(err.to_string().contains("evil-unknown-service"));
}

#[test]
fn test_empty_bundle_verifies() {
    let bundle = read_bundle("services: {}\n").expect("Failed to read bundle");
    let topology = bundle.verify().expect("Empty bundle should verify");
    assert_eq!(topology.services().len(), 0);
    assert!(topology.relations().is_empty());
}
