use thiserror::Error;

use crate::{latency::Latency, store::RecordStore};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean flag (1/0, true/false, yes/no, on/off), got `{value}`")]
    InvalidFlag { key: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

const SIMULATED_LATENCY_KEY: &str = "SIMULATED_LATENCY";
const SEED_DATA_KEY: &str = "SEED_DATA";

/// Environment-driven settings for building the process store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreSettings {
    pub simulated_latency: bool,
    /// Load the demo dataset. On unless `SEED_DATA` turns it off.
    pub seed: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            simulated_latency: false,
            seed: true,
        }
    }
}

impl StoreSettings {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let simulated_latency = match lookup(SIMULATED_LATENCY_KEY) {
            Some(raw) => parse_flag(SIMULATED_LATENCY_KEY, &raw)?,
            None => defaults.simulated_latency,
        };
        let seed = match lookup(SEED_DATA_KEY) {
            Some(raw) => parse_flag(SEED_DATA_KEY, &raw)?,
            None => defaults.seed,
        };
        Ok(Self {
            simulated_latency,
            seed,
        })
    }

    pub fn latency(&self) -> Latency {
        if self.simulated_latency {
            Latency::simulated()
        } else {
            Latency::none()
        }
    }

    pub fn build_store(&self) -> RecordStore {
        if self.seed {
            RecordStore::seeded(self.latency())
        } else {
            RecordStore::empty(self.latency())
        }
    }
}

fn parse_flag(key: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}
