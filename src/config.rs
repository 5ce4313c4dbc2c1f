use std::env;

pub const SEED_VAR: &str = "PIECE_QUEUE_SEED";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PIECE_QUEUE_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            _ => None,
        };

        Ok(Config { seed })
    }
}
