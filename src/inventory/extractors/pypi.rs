use super::CoordinateExtractor;
use crate::inventory::domain::{Coordinate, Ecosystem, PackageIdentity, Version};
use regex::Regex;
use std::sync::LazyLock;

/// Distribution archive extensions (sdist, wheel, egg)
const DISTRIBUTION_EXTENSIONS: &[&str] = &[".tar.gz", ".tar.bz2", ".zip", ".whl", ".egg"];

static NAME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)-\d+").expect("PyPI name pattern is valid"));

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-(\d+(?:\.\d+)*(?:\.post\d+)?(?:\.dev\d+)?(?:[abc]|rc|alpha|beta)?(?:\d+)?)")
        .expect("PyPI version pattern is valid")
});

/// Extracts PyPI coordinates from wheel, sdist and egg filenames
///
/// The stored path is ignored: PyPI remote layouts vary and the filename is
/// the only reliable source. Name and version are matched independently
/// because the boundary between them is ambiguous for names containing
/// digits; this is a best-effort heuristic, not a full filename parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct PypiExtractor;

impl PypiExtractor {
    pub fn new() -> Self {
        Self
    }

    fn strip_extension(filename: &str) -> Option<&str> {
        DISTRIBUTION_EXTENSIONS
            .iter()
            .find_map(|extension| filename.strip_suffix(extension))
    }

    fn package_name(stem: &str) -> Option<&str> {
        NAME_PREFIX
            .captures(stem)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }

    fn version_token(stem: &str) -> Option<&str> {
        let token = VERSION_TOKEN.captures(stem)?.get(1)?.as_str();
        let token = token.trim_matches(|c| c == '.' || c == '-');
        (!token.is_empty()).then_some(token)
    }
}

impl CoordinateExtractor for PypiExtractor {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::PyPi
    }

    fn extract(&self, _path: &str, filename: &str) -> Option<Coordinate> {
        let stem = Self::strip_extension(filename)?;
        let identity = PackageIdentity::pypi(Self::package_name(stem)?).ok()?;
        let version = Version::new(Self::version_token(stem)?).ok()?;
        Some(Coordinate::new(identity, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(filename: &str) -> Option<(String, String)> {
        PypiExtractor::new()
            .extract("packages/any/path", filename)
            .map(|c| (c.identity.to_string(), c.version.to_string()))
    }

    fn pair(name: &str, version: &str) -> Option<(String, String)> {
        Some((name.to_string(), version.to_string()))
    }

    #[test]
    fn test_wheel() {
        assert_eq!(
            extract("Jinja2-3.1.6-py3-none-any.whl"),
            pair("jinja2", "3.1.6")
        );
    }

    #[test]
    fn test_sdist_tar_gz() {
        assert_eq!(extract("numpy-1.26.0.tar.gz"), pair("numpy", "1.26.0"));
    }

    #[test]
    fn test_other_archive_types() {
        assert_eq!(extract("pytz-2024.1.tar.bz2"), pair("pytz", "2024.1"));
        assert_eq!(extract("pywin32-306.zip"), pair("pywin32", "306"));
        assert_eq!(
            extract("setuptools-0.6c11-py2.7.egg"),
            pair("setuptools", "0.6c11")
        );
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(
            extract("typing_extensions-4.9.0-py3-none-any.whl"),
            pair("typing-extensions", "4.9.0")
        );
        assert_eq!(
            extract("PyYAML-6.0.1-cp312-cp312-manylinux_2_17_x86_64.whl"),
            pair("pyyaml", "6.0.1")
        );
    }

    #[test]
    fn test_pre_and_post_release_suffixes() {
        assert_eq!(extract("Django-5.0rc1.tar.gz"), pair("django", "5.0rc1"));
        assert_eq!(extract("pkg-1.0.post2.tar.gz"), pair("pkg", "1.0.post2"));
        assert_eq!(extract("pkg-2.0.dev3.tar.gz"), pair("pkg", "2.0.dev3"));
        assert_eq!(extract("pkg-1.0b2-py3-none-any.whl"), pair("pkg", "1.0b2"));
    }

    #[test]
    fn test_path_is_ignored() {
        let by_path = PypiExtractor::new().extract("simple/other-name", "certifi-2025.7.14.tar.gz");
        let coordinate = by_path.unwrap();
        assert_eq!(coordinate.identity.to_string(), "certifi");
        assert_eq!(coordinate.version.to_string(), "2025.7.14");
    }

    #[test]
    fn test_rejects_unknown_extension() {
        assert_eq!(extract("numpy-1.26.0.tar.xz"), None);
        assert_eq!(extract("numpy-1.26.0.metadata"), None);
    }

    #[test]
    fn test_rejects_missing_version() {
        assert_eq!(extract("numpy.tar.gz"), None);
        assert_eq!(extract("numpy-latest.tar.gz"), None);
    }

    #[test]
    fn test_name_with_embedded_digits_is_lossy() {
        // A hyphen followed by a digit always starts the version
        assert_eq!(extract("py-3to2-1.1.tar.gz"), pair("py", "3"));
    }
}
