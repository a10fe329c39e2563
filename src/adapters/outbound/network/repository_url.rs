use crate::inventory::domain::Ecosystem;
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// Path marker that separates the service root from the repository name
const ARTIFACTORY_SEGMENT: &str = "/artifactory/";

/// Trailing index segment of PyPI repository URLs
const PYPI_INDEX_SUFFIX: &str = "/simple";

/// A repository URL split into service base URL and repository name
///
/// Accepts both the browse form (`https://host/artifactory/<repo>`) and the
/// ecosystem API form (`https://host/artifactory/api/npm/<repo>`,
/// `https://host/artifactory/api/pypi/<repo>/simple`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl {
    pub base_url: String,
    pub repository: String,
}

impl RepositoryUrl {
    pub fn parse(url: &str, ecosystem: Ecosystem) -> Result<Self> {
        let mut trimmed = url.trim().trim_end_matches('/');
        if ecosystem == Ecosystem::PyPi {
            if let Some(stripped) = trimmed.strip_suffix(PYPI_INDEX_SUFFIX) {
                trimmed = stripped;
            }
        }

        let api_split = ecosystem
            .api_segment()
            .and_then(|segment| trimmed.split_once(segment))
            .map(|(base, repository)| (base.to_string(), repository));

        let (base_url, repository) = match api_split {
            Some(split) => split,
            None => match trimmed.split_once(ARTIFACTORY_SEGMENT) {
                Some((host, repository)) => (format!("{}/artifactory", host), repository),
                None => {
                    return Err(InventoryError::InvalidRepositoryUrl {
                        url: url.to_string(),
                    }
                    .into())
                }
            },
        };

        if repository.is_empty() || base_url.is_empty() {
            return Err(InventoryError::InvalidRepositoryUrl {
                url: url.to_string(),
            }
            .into());
        }

        Ok(Self {
            base_url,
            repository: repository.to_string(),
        })
    }
}
