use super::PackageIdentity;
use crate::shared::Result;

/// Opaque version token taken from a stored path or filename
///
/// No semantic structure is assumed here; ordering by precedence is the job of
/// the version policies. The derived `Ord` is plain string order, which is what
/// all-versions listings sort by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A package release: identity plus version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub identity: PackageIdentity,
    pub version: Version,
}

impl Coordinate {
    pub fn new(identity: PackageIdentity, version: Version) -> Self {
        Self { identity, version }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_new_valid() {
        let version = Version::new("1.0.0-SNAPSHOT").unwrap();
        assert_eq!(version.as_str(), "1.0.0-SNAPSHOT");
        assert_eq!(version.to_string(), "1.0.0-SNAPSHOT");
    }

    #[test]
    fn test_version_new_empty() {
        assert!(Version::new("").is_err());
    }

    #[test]
    fn test_version_is_opaque() {
        assert_eq!(Version::new("1.0 final").unwrap().as_str(), "1.0 final");
        let long = format!("1.0.0-{}", "x".repeat(200));
        assert_eq!(Version::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_version_orders_as_raw_string() {
        let mut versions = vec![
            Version::new("1.2.9").unwrap(),
            Version::new("1.10.0").unwrap(),
            Version::new("1.2.0").unwrap(),
        ];
        versions.sort();
        let raw: Vec<&str> = versions.iter().map(Version::as_str).collect();
        assert_eq!(raw, vec!["1.10.0", "1.2.0", "1.2.9"]);
    }
}
