// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;
use cosmwasm_std::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Fraction of the chain's `min_deposit` that has to be attached to a proposal at submission.
pub const DEFAULT_MIN_INITIAL_DEPOSIT_PERCENT: u64 = 20;

/// How many levels of authz exec messages get unwrapped before the tx is rejected.
/// Matches the cosmos-sdk `Any` unpacking recursion limit, so any tx the node can decode
/// gets fully inspected.
pub const DEFAULT_MAX_EXEC_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fraction (within [0, 1]) of the governance `min_deposit` required as the initial deposit.
    pub min_initial_deposit_rate: Decimal,

    /// Maximum nesting of authz `MsgExec` messages. A top-level exec counts as depth 1.
    pub max_exec_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_initial_deposit_rate: Decimal::percent(DEFAULT_MIN_INITIAL_DEPOSIT_PERCENT),
            max_exec_depth: DEFAULT_MAX_EXEC_DEPTH,
        }
    }
}

impl Config {
    pub fn new(min_initial_deposit_rate: Decimal) -> Self {
        Config {
            min_initial_deposit_rate,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_max_exec_depth(mut self, max_exec_depth: usize) -> Self {
        self.max_exec_depth = max_exec_depth;
        self
    }

    pub fn ensure_is_valid(&self) -> Result<(), ConfigError> {
        if self.min_initial_deposit_rate > Decimal::one() {
            return Err(ConfigError::InvalidDepositRate {
                rate: self.min_initial_deposit_rate,
            });
        }
        if self.max_exec_depth == 0 {
            return Err(ConfigError::ZeroExecDepth);
        }
        Ok(())
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw)?;
        config.ensure_is_valid()?;
        Ok(config)
    }

    pub fn read_from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ConfigLoadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = Self::from_toml_str(&raw)?;
        debug!("loaded config file from {}", path.display());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(
            config.min_initial_deposit_rate,
            Decimal::from_str("0.2").unwrap()
        );
        assert_eq!(config.max_exec_depth, DEFAULT_MAX_EXEC_DEPTH);
        assert!(config.ensure_is_valid().is_ok());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_toml_str("max_exec_depth = 3").unwrap();
        assert_eq!(config, Config::default().with_max_exec_depth(3));
    }

    #[test]
    fn parsing_rate_from_toml() {
        let config = Config::from_toml_str(r#"min_initial_deposit_rate = "0.35""#).unwrap();
        assert_eq!(config.min_initial_deposit_rate, Decimal::percent(35));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_toml_str(r#"min_initial_deposit_rate = "1.5""#),
            Err(ConfigError::InvalidDepositRate { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("max_exec_depth = 0"),
            Err(ConfigError::ZeroExecDepth)
        ));
        assert!(matches!(
            Config::from_toml_str("unknown_field = true"),
            Err(ConfigError::MalformedConfig { .. })
        ));
        assert!(matches!(
            Config::from_toml_str(r#"min_initial_deposit_rate = "-0.1""#),
            Err(ConfigError::MalformedConfig { .. })
        ));
    }

    #[test]
    fn reading_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"min_initial_deposit_rate = "0.1""#).unwrap();
        writeln!(file, "max_exec_depth = 2").unwrap();

        let config = Config::read_from_toml_file(file.path()).unwrap();
        assert_eq!(config.min_initial_deposit_rate, Decimal::percent(10));
        assert_eq!(config.max_exec_depth, 2);
    }

    #[test]
    fn missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = Config::read_from_toml_file(dir.path().join("config.toml"));
        assert!(matches!(res, Err(ConfigError::ConfigLoadFailure { .. })));
    }
}
