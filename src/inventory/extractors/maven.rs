use super::{path_segments, CoordinateExtractor};
use crate::inventory::domain::{Coordinate, Ecosystem, PackageIdentity, Version};

/// Checksum and signature siblings of real artifacts
const SIDECAR_SUFFIXES: &[&str] = &[".md5", ".sha1", ".sha256", ".sha512", ".asc", ".pom.asc"];

/// Primary artifact types worth reporting
const ARTIFACT_SUFFIXES: &[&str] = &[".jar", ".pom"];

/// Non-primary classifier variants
const CLASSIFIER_MARKERS: &[&str] = &["-sources.jar", "-javadoc.jar", "-tests.jar"];

/// Extracts `groupId:artifactId:version` from the Maven repository layout
///
/// Layout: `group/path/artifactId/version/artifactId-version[-classifier].ext`
#[derive(Debug, Default, Clone, Copy)]
pub struct MavenExtractor;

impl MavenExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl CoordinateExtractor for MavenExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Maven
    }

    fn extract(&self, path: &str, filename: &str) -> Option<Coordinate> {
        if SIDECAR_SUFFIXES.iter().any(|suffix| filename.ends_with(suffix)) {
            return None;
        }
        if !ARTIFACT_SUFFIXES.iter().any(|suffix| filename.ends_with(suffix)) {
            return None;
        }
        if CLASSIFIER_MARKERS.iter().any(|marker| filename.contains(marker)) {
            return None;
        }

        let segments = path_segments(path);
        if segments.len() < 3 {
            return None;
        }

        let (group_segments, tail) = segments.split_at(segments.len() - 2);
        let (artifact_id, version) = (tail[0], tail[1]);
        let group_id = group_segments.join(".");

        // Guards against mis-segmented paths producing a false coordinate
        let expected_prefix = format!("{}-{}", artifact_id, version);
        if !filename.starts_with(&expected_prefix) {
            return None;
        }

        let identity = PackageIdentity::maven(group_id, artifact_id).ok()?;
        let version = Version::new(version).ok()?;
        Some(Coordinate::new(identity, version))
    }
}
