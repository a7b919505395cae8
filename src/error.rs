use crate::preferences::error::PreferencesError;
use crate::providers::error::ProviderError;
use crate::summary::error::SummaryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HiemsError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),
}
