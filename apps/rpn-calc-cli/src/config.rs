//! Application configuration.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use rpn_calc::config::RpnCalcConfig;
use serde::{Deserialize, Serialize};

/// Environment prefix; `__` separates nested keys.
const ENV_PREFIX: &str = "RPNCALC__";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub rpn_calc: RpnCalcConfig,
}

impl AppConfig {
    /// Loads defaults, then the YAML file if given, then `RPNCALC__*` env vars.
    ///
    /// # Errors
    /// Returns an error if a layer cannot be parsed into `AppConfig`.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// `-v` info, `-vv` debug, `-vvv` trace; no flag keeps the configured level.
    pub fn apply_cli_overrides(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = AppConfig::load_or_default(None).unwrap();
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.rpn_calc, RpnCalcConfig::default());
    }

    #[test]
    fn test_yaml_overrides_defaults() {
        let file = yaml_file(
            "logging:\n  level: debug\n  format: json\nrpn_calc:\n  max_stack_depth: 32\n",
        );
        let cfg = AppConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.rpn_calc.max_stack_depth, Some(32));
        assert_eq!(cfg.rpn_calc.max_calculators, None);
        assert_eq!(cfg.rpn_calc.initial_table_capacity, 8);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = yaml_file("rpn_calc:\n  stack_limit: 4\n");
        assert!(AppConfig::load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn test_verbose_overrides_level() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(0);
        assert_eq!(cfg.logging.level, "warn");
        cfg.apply_cli_overrides(2);
        assert_eq!(cfg.logging.level, "debug");
        cfg.apply_cli_overrides(7);
        assert_eq!(cfg.logging.level, "trace");
    }

    #[test]
    fn test_json_round_trips() {
        let cfg = AppConfig::default();
        let json = cfg.to_json().unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
