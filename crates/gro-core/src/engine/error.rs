use thiserror::Error;

use super::config::ConfigError;
use super::utils::sampling::SamplingError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Candidate sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },
}
