use crate::providers::error::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Conditions summary is not configured")]
    NotConfigured,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Chat completion returned an empty summary")]
    EmptyResponse,
}
