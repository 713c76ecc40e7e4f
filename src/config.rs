//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gateway::{SimulatedGateway, DEFAULT_DELAY, DEFAULT_FAILURE_RATE};

const DELAY_ENV: &str = "SIGNUP_GATEWAY_DELAY_MS";
const FAILURE_RATE_ENV: &str = "SIGNUP_GATEWAY_FAILURE_RATE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SignupConfig {
    /// Simulated gateway latency in milliseconds
    pub gateway_delay_ms: Option<u64>,
    /// Share of simulated sign-ups that are rejected (0.0 - 1.0)
    pub gateway_failure_rate: Option<f64>,
    /// Show password fields in plain text from the start
    pub reveal_passwords: Option<bool>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(
            std::env::var(DELAY_ENV).ok().as_deref(),
            std::env::var(FAILURE_RATE_ENV).ok().as_deref(),
        );
        Ok(config)
    }

    /// Load configuration from `path`, defaulting when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: SignupConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply raw env values; unparsable values are ignored with a warning
    fn apply_overrides(&mut self, delay_ms: Option<&str>, failure_rate: Option<&str>) {
        if let Some(raw) = delay_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.gateway_delay_ms = Some(ms),
                Err(_) => tracing::warn!(value = raw, "ignoring invalid {DELAY_ENV}"),
            }
        }
        if let Some(raw) = failure_rate {
            match raw.trim().parse::<f64>() {
                Ok(rate) => self.gateway_failure_rate = Some(rate),
                Err(_) => tracing::warn!(value = raw, "ignoring invalid {FAILURE_RATE_ENV}"),
            }
        }
    }

    pub fn gateway_delay(&self) -> Duration {
        self.gateway_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    /// Failure rate clamped to `0.0..=1.0`
    pub fn failure_rate(&self) -> f64 {
        match self.gateway_failure_rate {
            Some(rate) if rate.is_finite() => rate.clamp(0.0, 1.0),
            _ => DEFAULT_FAILURE_RATE,
        }
    }

    pub fn reveal_passwords(&self) -> bool {
        self.reveal_passwords.unwrap_or(false)
    }

    /// Build the simulated gateway described by this config
    pub fn build_gateway(&self) -> SimulatedGateway {
        SimulatedGateway::new(self.gateway_delay(), self.failure_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert!(config.gateway_delay_ms.is_none());
        assert!(config.gateway_failure_rate.is_none());
        assert!(config.reveal_passwords.is_none());
        assert_eq!(config.gateway_delay(), Duration::from_millis(1500));
        assert_eq!(config.failure_rate(), 0.1);
        assert!(!config.reveal_passwords());
    }

    #[test]
    fn test_serialization() {
        let config = SignupConfig {
            gateway_delay_ms: Some(200),
            gateway_failure_rate: Some(0.5),
            reveal_passwords: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SignupConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SignupConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SignupConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"gateway_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.gateway_delay_ms, Some(10));
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let high = SignupConfig {
            gateway_failure_rate: Some(3.0),
            ..Default::default()
        };
        let low = SignupConfig {
            gateway_failure_rate: Some(-0.2),
            ..Default::default()
        };
        let nan = SignupConfig {
            gateway_failure_rate: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(high.failure_rate(), 1.0);
        assert_eq!(low.failure_rate(), 0.0);
        assert_eq!(nan.failure_rate(), 0.1);
    }

    #[test]
    fn test_env_overrides_replace_file_values() {
        let mut config = SignupConfig {
            gateway_delay_ms: Some(10),
            ..Default::default()
        };
        config.apply_overrides(Some("250"), Some("0.75"));
        assert_eq!(config.gateway_delay(), Duration::from_millis(250));
        assert_eq!(config.failure_rate(), 0.75);
    }

    #[test]
    fn test_invalid_env_overrides_are_ignored() {
        let mut config = SignupConfig {
            gateway_delay_ms: Some(10),
            ..Default::default()
        };
        config.apply_overrides(Some("soon"), Some("often"));
        assert_eq!(config.gateway_delay_ms, Some(10));
        assert!(config.gateway_failure_rate.is_none());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("signup-tui-missing-config.json");
        let _ = fs::remove_file(&path);
        assert_eq!(SignupConfig::load_from(&path).unwrap(), SignupConfig::default());
    }

    #[test]
    fn test_load_from_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-config-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        fs::write(&path, r#"{"gateway_delay_ms": 5, "reveal_passwords": true}"#).unwrap();
        let config = SignupConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.gateway_delay_ms, Some(5));
        assert!(config.reveal_passwords());
    }

    #[test]
    fn test_load_from_rejects_malformed_json() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-bad-config-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        fs::write(&path, "{not json").unwrap();
        let result = SignupConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_gateway_uses_config() {
        let config = SignupConfig {
            gateway_delay_ms: Some(0),
            gateway_failure_rate: Some(1.0),
            ..Default::default()
        };
        let gateway = config.build_gateway();
        assert_eq!(gateway.delay(), Duration::ZERO);
        assert_eq!(gateway.failure_rate(), 1.0);
    }
}
