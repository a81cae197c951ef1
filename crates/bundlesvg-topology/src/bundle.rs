//! The bundle data model as read from YAML.
//!
//! [`Bundle`] mirrors the document a user writes: services keyed by name (in
//! the order they appear in the source) and a list of relations, each a list
//! of endpoint strings. Nothing here is validated; see
//! [`Bundle::verify`](crate::Bundle::verify) for that.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_yaml::Value;

use crate::error::ReadError;

/// A service topology as written in a bundle file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bundle {
    /// Services keyed by name, in source order.
    #[serde(default)]
    pub services: IndexMap<String, ServiceSpec>,

    /// Relations, each naming the endpoints it connects.
    #[serde(default)]
    pub relations: Vec<Vec<String>>,

    /// Default series for charms that do not name one.
    #[serde(default)]
    pub series: Option<String>,
}

/// One service entry of a bundle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceSpec {
    /// Charm reference; also used to find the service's icon.
    #[serde(default)]
    pub charm: String,

    #[serde(default)]
    pub num_units: u32,

    #[serde(default)]
    pub expose: bool,

    /// Free-form annotations; scalar values are kept in their string form.
    #[serde(default, deserialize_with = "scalar_map")]
    pub annotations: IndexMap<String, String>,

    #[serde(default)]
    pub constraints: Option<String>,

    #[serde(default)]
    pub options: IndexMap<String, Value>,
}

impl ServiceSpec {
    /// Creates a service running `charm` with no annotations.
    pub fn new(charm: impl Into<String>) -> Self {
        Self {
            charm: charm.into(),
            ..Self::default()
        }
    }

    /// Adds an annotation (builder style).
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

/// Reads a bundle from YAML source.
///
/// # Errors
///
/// Returns [`ReadError`] if the source is not valid YAML or does not have the
/// shape of a bundle.
///
/// # Examples
///
/// ```
/// let bundle = bundlesvg_topology::read_bundle(
///     "services:\n  mysql:\n    charm: cs:trusty/mysql\n",
/// )
/// .unwrap();
/// assert_eq!(bundle.services["mysql"].charm, "cs:trusty/mysql");
/// ```
pub fn read_bundle(source: &str) -> Result<Bundle, ReadError> {
    let bundle: Bundle = serde_yaml::from_str(source)?;
    debug!(
        services = bundle.services.len(),
        relations = bundle.relations.len();
        "Bundle read"
    );
    Ok(bundle)
}

fn scalar_map<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();

    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                // `key: ~` and a bare `key:` carry no value.
                Value::Null => String::new(),
                _ => {
                    return Err(D::Error::custom(format!(
                        "annotation {key:?} must be a scalar value"
                    )));
                }
            };
            Ok((key, value))
        })
        .collect()
}
