use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to retrieve record source '{0}': {1}")]
    Unavailable(String, #[source] StoreError),

    #[error("Failed to parse record source '{0}': {1}")]
    Parse(String, String),
}
