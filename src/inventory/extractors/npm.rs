use super::{path_segments, CoordinateExtractor};
use crate::inventory::domain::{Coordinate, Ecosystem, PackageIdentity, Version};
use regex::Regex;
use std::sync::LazyLock;

/// Leading path segment of the metadata storage layout
const METADATA_ROOT: &str = ".npm";

/// Shortest name prefix, a hyphen, then a digit-led remainder
static NAME_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)-(\d+[\d.\-\w]*)$").expect("npm name-version pattern is valid")
});

/// Extracts npm coordinates from both Artifactory npm storage layouts
///
/// - Metadata layout: `.npm/<name>/` or `.npm/@scope/<name>/` holding
///   `<name>-<version>.json`; the identity comes from the path.
/// - Content-addressable layout: `<hash>/<hash>/[...]` holding
///   `<name>-<version>.tgz`; the filename is authoritative and scoped names
///   are flattened to `@scope-name`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NpmExtractor;

impl NpmExtractor {
    pub fn new() -> Self {
        Self
    }

    fn strip_extension(filename: &str) -> Option<&str> {
        filename
            .strip_suffix(".json")
            .or_else(|| filename.strip_suffix(".tgz"))
    }

    /// Splits `name-version` at the first hyphen followed by a digit-led tail
    fn split_name_version(stem: &str) -> Option<(&str, &str)> {
        let captures = NAME_VERSION.captures(stem)?;
        let name = captures.get(1)?.as_str();
        let version = captures.get(2)?.as_str();
        if !version.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        Some((name, version))
    }

    fn identity_from_metadata_path(segments: &[&str]) -> Option<PackageIdentity> {
        let first = *segments.get(1)?;
        if first.starts_with('@') {
            // A scope directory without a package directory is not a package
            let name = *segments.get(2)?;
            PackageIdentity::npm(Some(first.to_string()), name).ok()
        } else {
            PackageIdentity::npm(None, first).ok()
        }
    }

    /// Rebuilds `@scope/name` from the flattened `@scope-name` filename form
    fn identity_from_filename(name: &str) -> Option<PackageIdentity> {
        if name.starts_with('@') {
            let (scope, unscoped) = name.split_once('-')?;
            PackageIdentity::npm(Some(scope.to_string()), unscoped).ok()
        } else {
            PackageIdentity::npm(None, name).ok()
        }
    }
}

impl CoordinateExtractor for NpmExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn extract(&self, path: &str, filename: &str) -> Option<Coordinate> {
        // The package document itself describes every version at once
        if filename == "package.json" {
            return None;
        }
        let stem = Self::strip_extension(filename)?;

        let segments = path_segments(path);
        if segments.len() < 2 {
            return None;
        }

        let (name, version) = Self::split_name_version(stem)?;
        let identity = if segments[0] == METADATA_ROOT {
            // `.npm/@scope/<file>` yields nothing rather than the bare scope
            Self::identity_from_metadata_path(&segments)?
        } else {
            Self::identity_from_filename(name)?
        };

        let version = Version::new(version).ok()?;
        Some(Coordinate::new(identity, version))
    }
}
