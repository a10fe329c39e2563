use super::Ecosystem;
use crate::shared::Result;
use std::cmp::Ordering;

/// Ecosystem-specific package identity
///
/// Maven coordinates are kept verbatim (case-sensitive). PyPI names are
/// canonicalised on construction, so structural equality is already
/// case-insensitive there; npm lookups go through [`PackageIdentity::matches_query`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageIdentity {
    Maven {
        group_id: String,
        artifact_id: String,
    },
    Npm {
        /// Scope including the leading `@`
        scope: Option<String>,
        name: String,
    },
    PyPi {
        normalized_name: String,
    },
}

fn validate_component(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }
    Ok(())
}

/// PyPI distribution-name canonicalisation: underscores become hyphens, lower-cased
pub fn normalize_pypi_name(name: &str) -> String {
    name.replace('_', "-").to_lowercase()
}

impl PackageIdentity {
    pub fn maven(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        validate_component(&group_id, "groupId")?;
        validate_component(&artifact_id, "artifactId")?;
        Ok(Self::Maven {
            group_id,
            artifact_id,
        })
    }

    pub fn npm(scope: Option<String>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_component(&name, "npm package name")?;
        if let Some(scope) = scope.as_deref() {
            if !scope.starts_with('@') || scope.len() < 2 {
                anyhow::bail!("npm scope '{}' must start with '@' and be non-empty", scope);
            }
            validate_component(scope, "npm scope")?;
        }
        Ok(Self::Npm { scope, name })
    }

    pub fn pypi(name: &str) -> Result<Self> {
        let normalized_name = normalize_pypi_name(name);
        validate_component(&normalized_name, "Python package name")?;
        Ok(Self::PyPi { normalized_name })
    }

    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            PackageIdentity::Maven { .. } => Ecosystem::Maven,
            PackageIdentity::Npm { .. } => Ecosystem::Npm,
            PackageIdentity::PyPi { .. } => Ecosystem::PyPi,
        }
    }

    /// Namespace columns used in tabular output
    ///
    /// Maven yields `[groupId, artifactId]`; npm and PyPI yield the full name.
    pub fn namespace_fields(&self) -> Vec<String> {
        match self {
            PackageIdentity::Maven {
                group_id,
                artifact_id,
            } => vec![group_id.clone(), artifact_id.clone()],
            other => vec![other.to_string()],
        }
    }

    /// Whether a user-supplied name filter selects this identity
    ///
    /// - Maven: exact `artifactId`, or exact `groupId:artifactId` when the query has a `:`
    /// - npm: case-insensitive match on the full `@scope/name`
    /// - PyPI: the query is canonicalised the same way as the stored name
    pub fn matches_query(&self, query: &str) -> bool {
        match self {
            PackageIdentity::Maven {
                group_id,
                artifact_id,
            } => match query.split_once(':') {
                Some((group, artifact)) => group == group_id && artifact == artifact_id,
                None => query == artifact_id,
            },
            PackageIdentity::Npm { .. } => self.to_string().eq_ignore_ascii_case(query),
            PackageIdentity::PyPi { normalized_name } => {
                *normalized_name == normalize_pypi_name(query)
            }
        }
    }
}

impl std::fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageIdentity::Maven {
                group_id,
                artifact_id,
            } => write!(f, "{}:{}", group_id, artifact_id),
            PackageIdentity::Npm {
                scope: Some(scope),
                name,
            } => write!(f, "{}/{}", scope, name),
            PackageIdentity::Npm { scope: None, name } => write!(f, "{}", name),
            PackageIdentity::PyPi { normalized_name } => write!(f, "{}", normalized_name),
        }
    }
}

// Listings are ordered the way users read names: Maven by (groupId, artifactId),
// npm by the rendered `@scope/name` string, PyPI by canonical name.
impl Ord for PackageIdentity {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                PackageIdentity::Maven {
                    group_id: g1,
                    artifact_id: a1,
                },
                PackageIdentity::Maven {
                    group_id: g2,
                    artifact_id: a2,
                },
            ) => g1.cmp(g2).then_with(|| a1.cmp(a2)),
            (
                PackageIdentity::Npm {
                    scope: s1,
                    name: n1,
                },
                PackageIdentity::Npm {
                    scope: s2,
                    name: n2,
                },
            ) => self
                .to_string()
                .cmp(&other.to_string())
                .then_with(|| s1.cmp(s2))
                .then_with(|| n1.cmp(n2)),
            (
                PackageIdentity::PyPi {
                    normalized_name: n1,
                },
                PackageIdentity::PyPi {
                    normalized_name: n2,
                },
            ) => n1.cmp(n2),
            _ => self.ecosystem().cmp(&other.ecosystem()),
        }
    }
}

impl PartialOrd for PackageIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
