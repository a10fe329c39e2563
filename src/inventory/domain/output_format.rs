use super::Ecosystem;

/// Notation a coordinate is rendered in
///
/// Each ecosystem owns three formats: the plain `simple` coordinate plus two
/// ecosystem-native snippets. The CLI and the formatters share this enum, so it
/// lives next to the other domain value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `g:a:v`, `name@v` or `name==v` (default)
    Simple,
    /// Maven `<dependency>` block
    Maven,
    /// Gradle `implementation` line
    Gradle,
    /// `npm install` command
    Npm,
    /// `package.json` dependency entry
    PackageJson,
    /// `pip install` command
    Pip,
    /// `pyproject.toml` dependency entry
    Pyproject,
}

impl OutputFormat {
    /// Formats that are valid for an ecosystem, `simple` first
    pub fn supported_by(ecosystem: Ecosystem) -> &'static [OutputFormat] {
        match ecosystem {
            Ecosystem::Maven => &[OutputFormat::Simple, OutputFormat::Maven, OutputFormat::Gradle],
            Ecosystem::Npm => &[OutputFormat::Simple, OutputFormat::Npm, OutputFormat::PackageJson],
            Ecosystem::PyPi => &[OutputFormat::Simple, OutputFormat::Pip, OutputFormat::Pyproject],
        }
    }

    pub fn supports(&self, ecosystem: Ecosystem) -> bool {
        Self::supported_by(ecosystem).contains(self)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "maven" => Ok(OutputFormat::Maven),
            "gradle" => Ok(OutputFormat::Gradle),
            "npm" => Ok(OutputFormat::Npm),
            "package-json" => Ok(OutputFormat::PackageJson),
            "pip" => Ok(OutputFormat::Pip),
            "pyproject" => Ok(OutputFormat::Pyproject),
            _ => Err(format!(
                "Invalid format: {}. Please specify one of 'simple', 'maven', 'gradle', 'npm', 'package-json', 'pip' or 'pyproject'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Simple => write!(f, "simple"),
            OutputFormat::Maven => write!(f, "maven"),
            OutputFormat::Gradle => write!(f, "gradle"),
            OutputFormat::Npm => write!(f, "npm"),
            OutputFormat::PackageJson => write!(f, "package-json"),
            OutputFormat::Pip => write!(f, "pip"),
            OutputFormat::Pyproject => write!(f, "pyproject"),
        }
    }
}
