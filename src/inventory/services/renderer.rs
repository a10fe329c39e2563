use crate::inventory::domain::{Coordinate, OutputFormat, PackageIdentity};

/// CoordinateRenderer - formats one coordinate in an ecosystem-native notation
///
/// Pure formatting. Wrapping entries into a whole document (a `package.json`
/// object, a `pyproject.toml` array) belongs to the formatter adapters.
pub struct CoordinateRenderer;

impl CoordinateRenderer {
    /// Renders a coordinate
    ///
    /// Formats foreign to the coordinate's ecosystem fall back to `simple`;
    /// callers are expected to reject them earlier.
    pub fn render(coordinate: &Coordinate, format: OutputFormat) -> String {
        let identity = &coordinate.identity;
        let version = coordinate.version.as_str();

        match (identity, format) {
            (
                PackageIdentity::Maven {
                    group_id,
                    artifact_id,
                },
                OutputFormat::Maven,
            ) => format!(
                "<dependency>\n  <groupId>{}</groupId>\n  <artifactId>{}</artifactId>\n  <version>{}</version>\n</dependency>",
                group_id, artifact_id, version
            ),
            (PackageIdentity::Maven { .. }, OutputFormat::Gradle) => {
                format!("implementation '{}:{}'", identity, version)
            }
            (PackageIdentity::Npm { .. }, OutputFormat::Npm) => {
                format!("npm install {}@{}", identity, version)
            }
            (PackageIdentity::Npm { .. }, OutputFormat::PackageJson) => {
                format!("  \"{}\": \"{}\"", identity, version)
            }
            (PackageIdentity::PyPi { .. }, OutputFormat::Pip) => {
                format!("pip install {}=={}", identity, version)
            }
            (PackageIdentity::PyPi { .. }, OutputFormat::Pyproject) => {
                format!("  \"{}=={}\"", identity, version)
            }
            _ => Self::simple(coordinate),
        }
    }

    /// The plain coordinate string: `g:a:v`, `name@v` or `name==v`
    pub fn simple(coordinate: &Coordinate) -> String {
        let identity = &coordinate.identity;
        let version = &coordinate.version;
        match identity {
            PackageIdentity::Maven { .. } => format!("{}:{}", identity, version),
            PackageIdentity::Npm { .. } => format!("{}@{}", identity, version),
            PackageIdentity::PyPi { .. } => format!("{}=={}", identity, version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::Version;

    fn maven() -> Coordinate {
        Coordinate::new(
            PackageIdentity::maven("com.google.guava", "guava").unwrap(),
            Version::new("33.0.0-jre").unwrap(),
        )
    }

    fn npm() -> Coordinate {
        Coordinate::new(
            PackageIdentity::npm(Some("@types".to_string()), "node").unwrap(),
            Version::new("18.11.9").unwrap(),
        )
    }

    fn pypi() -> Coordinate {
        Coordinate::new(
            PackageIdentity::pypi("Jinja2").unwrap(),
            Version::new("3.1.6").unwrap(),
        )
    }

    #[test]
    fn test_maven_formats() {
        assert_eq!(
            CoordinateRenderer::render(&maven(), OutputFormat::Simple),
            "com.google.guava:guava:33.0.0-jre"
        );
        assert_eq!(
            CoordinateRenderer::render(&maven(), OutputFormat::Gradle),
            "implementation 'com.google.guava:guava:33.0.0-jre'"
        );
        assert_eq!(
            CoordinateRenderer::render(&maven(), OutputFormat::Maven),
            "<dependency>\n  <groupId>com.google.guava</groupId>\n  <artifactId>guava</artifactId>\n  <version>33.0.0-jre</version>\n</dependency>"
        );
    }

    #[test]
    fn test_npm_formats() {
        assert_eq!(
            CoordinateRenderer::render(&npm(), OutputFormat::Simple),
            "@types/node@18.11.9"
        );
        assert_eq!(
            CoordinateRenderer::render(&npm(), OutputFormat::Npm),
            "npm install @types/node@18.11.9"
        );
        assert_eq!(
            CoordinateRenderer::render(&npm(), OutputFormat::PackageJson),
            "  \"@types/node\": \"18.11.9\""
        );
    }

    #[test]
    fn test_pypi_formats() {
        assert_eq!(
            CoordinateRenderer::render(&pypi(), OutputFormat::Simple),
            "jinja2==3.1.6"
        );
        assert_eq!(
            CoordinateRenderer::render(&pypi(), OutputFormat::Pip),
            "pip install jinja2==3.1.6"
        );
        assert_eq!(
            CoordinateRenderer::render(&pypi(), OutputFormat::Pyproject),
            "  \"jinja2==3.1.6\""
        );
    }

    #[test]
    fn test_foreign_format_falls_back_to_simple() {
        assert_eq!(
            CoordinateRenderer::render(&pypi(), OutputFormat::Gradle),
            "jinja2==3.1.6"
        );
    }
}
