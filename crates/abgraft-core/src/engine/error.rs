use super::config::ConfigError;
use super::sampling::SamplingError;
use crate::core::permutation::PermutationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Permutation enumeration failed: {source}")]
    Permutation {
        #[from]
        source: PermutationError,
    },

    #[error("Permutation sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },
}
