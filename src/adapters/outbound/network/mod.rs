/// Network adapters for the repository manager
mod aql;
mod artifactory_client;
mod repository_url;

pub use aql::{AqlQuery, DEBUG_ITEM_LIMIT};
pub use artifactory_client::{ArtifactoryClient, Credentials};
pub use repository_url::RepositoryUrl;
