use anyhow::{Context, Result};
use platform_db::StoreSettings;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub cors_allowed_origins: Vec<String>,
    pub store: StoreSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_allowed_origins = parse_origins(
            &lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into()),
        );
        let store = StoreSettings::from_lookup(&lookup).context("invalid store settings")?;

        Ok(Self {
            cors_allowed_origins,
            store,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:5173"]);
        assert!(config.store.seed);
        assert!(!config.store.simulated_latency);
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://a.example, ,https://b.example ",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn bad_store_flag_is_reported() {
        let err = AppConfig::from_lookup(lookup_from(&[("SIMULATED_LATENCY", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("invalid store settings"));
    }
}
