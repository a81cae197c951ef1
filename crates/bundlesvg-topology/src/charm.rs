//! Charm references.
//!
//! A charm reference names the software a service runs and doubles as the
//! service's icon reference. The accepted form is
//! `[schema:][~user/][series/]name[-revision]`, for example
//! `cs:~charming-devs/precise/elasticsearch-2`.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]*[a-z][a-z0-9]*)*$").expect("valid name regex")
});

static SERIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+([a-z0-9]+)?$").expect("valid series regex"));

static USER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-zA-Z0-9+.-]+$").expect("valid user regex"));

/// Returns true if `name` is a valid charm or service name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Returns true if `series` is a valid series name.
pub fn is_valid_series(series: &str) -> bool {
    SERIES_RE.is_match(series)
}

/// Errors produced while parsing a [`CharmRef`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharmRefError {
    #[error("empty charm reference")]
    Empty,

    #[error("charm reference {reference:?} has unsupported schema {schema:?}")]
    Schema { reference: String, schema: String },

    #[error("charm reference {reference:?} has invalid user name {user:?}")]
    User { reference: String, user: String },

    #[error("local charm reference {reference:?} cannot specify a user")]
    LocalUser { reference: String },

    #[error("charm reference {reference:?} has invalid series {series:?}")]
    Series { reference: String, series: String },

    #[error("charm reference {reference:?} has invalid name {name:?}")]
    Name { reference: String, name: String },

    #[error("charm reference {reference:?} has too many path segments")]
    Segments { reference: String },
}

/// Where a charm is published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Schema {
    /// The public charm store (`cs:`)
    #[default]
    CharmStore,
    /// A local charm repository (`local:`)
    Local,
}

impl Schema {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CharmStore => "cs",
            Self::Local => "local",
        }
    }
}

/// A parsed charm reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharmRef {
    schema: Schema,
    user: Option<String>,
    series: Option<String>,
    name: String,
    revision: Option<u32>,
}

impl CharmRef {
    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn series(&self) -> Option<&str> {
        self.series.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revision(&self) -> Option<u32> {
        self.revision
    }

    /// Returns the reference without its schema, e.g. `~user/precise/name-2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesvg_topology::CharmRef;
    ///
    /// let charm: CharmRef = "cs:~juju-jitsu/precise/charmworld-58".parse().unwrap();
    /// assert_eq!(charm.path(), "~juju-jitsu/precise/charmworld-58");
    /// ```
    pub fn path(&self) -> String {
        let mut segments = Vec::with_capacity(3);
        if let Some(user) = &self.user {
            segments.push(format!("~{user}"));
        }
        if let Some(series) = &self.series {
            segments.push(series.clone());
        }
        match self.revision {
            Some(revision) => segments.push(format!("{}-{revision}", self.name)),
            None => segments.push(self.name.clone()),
        }
        segments.join("/")
    }
}

impl fmt::Display for CharmRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.schema.as_str(), self.path())
    }
}

impl FromStr for CharmRef {
    type Err = CharmRefError;

    fn from_str(reference: &str) -> Result<Self, Self::Err> {
        if reference.is_empty() {
            return Err(CharmRefError::Empty);
        }

        let (schema, rest) = match reference.split_once(':') {
            Some(("cs", rest)) => (Schema::CharmStore, rest),
            Some(("local", rest)) => (Schema::Local, rest),
            Some((schema, _)) => {
                return Err(CharmRefError::Schema {
                    reference: reference.to_string(),
                    schema: schema.to_string(),
                });
            }
            None => (Schema::CharmStore, reference),
        };

        let mut segments: Vec<&str> = rest.split('/').collect();

        let user = match segments.first().and_then(|s| s.strip_prefix('~')) {
            Some(user) => {
                if !USER_RE.is_match(user) {
                    return Err(CharmRefError::User {
                        reference: reference.to_string(),
                        user: user.to_string(),
                    });
                }
                if schema == Schema::Local {
                    return Err(CharmRefError::LocalUser {
                        reference: reference.to_string(),
                    });
                }
                segments.remove(0);
                Some(user.to_string())
            }
            None => None,
        };

        let (series, name_revision) = match segments.as_slice() {
            [name] => (None, *name),
            [series, name] => {
                if !is_valid_series(series) {
                    return Err(CharmRefError::Series {
                        reference: reference.to_string(),
                        series: series.to_string(),
                    });
                }
                (Some(series.to_string()), *name)
            }
            _ => {
                return Err(CharmRefError::Segments {
                    reference: reference.to_string(),
                });
            }
        };

        let (name, revision) = split_revision(name_revision);
        if !is_valid_name(name) {
            return Err(CharmRefError::Name {
                reference: reference.to_string(),
                name: name.to_string(),
            });
        }

        Ok(Self {
            schema,
            user,
            series,
            name: name.to_string(),
            revision,
        })
    }
}

/// Splits a trailing `-<digits>` revision off a charm name.
fn split_revision(name: &str) -> (&str, Option<u32>) {
    let Some((base, suffix)) = name.rsplit_once('-') else {
        return (name, None);
    };
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return (name, None);
    }
    match suffix.parse() {
        Ok(revision) => (base, Some(revision)),
        Err(_) => (name, None),
    }
}
