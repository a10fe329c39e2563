/// Package ecosystems whose cached artifacts can be inventoried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ecosystem {
    /// Java artifacts stored in the Maven repository layout
    Maven,
    /// npm metadata documents and tarballs
    Npm,
    /// Python wheels and source distributions
    PyPi,
}

impl Ecosystem {
    /// Filename patterns (Artifactory `$match` syntax) that can hold a package artifact
    pub fn artifact_patterns(&self) -> &'static [&'static str] {
        match self {
            Ecosystem::Maven => &["*.jar", "*.pom"],
            Ecosystem::Npm => &["*.json", "*.tgz"],
            Ecosystem::PyPi => &["*.whl", "*.tar.gz", "*.tar.bz2", "*.zip", "*.egg"],
        }
    }

    /// Ecosystem-specific API segment that may appear in a repository URL
    pub fn api_segment(&self) -> Option<&'static str> {
        match self {
            Ecosystem::Maven => None,
            Ecosystem::Npm => Some("/api/npm/"),
            Ecosystem::PyPi => Some("/api/pypi/"),
        }
    }

    /// Human-readable name used in progress messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Maven => "Maven",
            Ecosystem::Npm => "npm",
            Ecosystem::PyPi => "Python",
        }
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maven" | "java" => Ok(Ecosystem::Maven),
            "npm" | "node" | "javascript" => Ok(Ecosystem::Npm),
            "pypi" | "python" | "pip" => Ok(Ecosystem::PyPi),
            _ => Err(format!(
                "Invalid ecosystem: {}. Please specify 'maven', 'npm' or 'pypi'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Maven => write!(f, "maven"),
            Ecosystem::Npm => write!(f, "npm"),
            Ecosystem::PyPi => write!(f, "pypi"),
        }
    }
}
