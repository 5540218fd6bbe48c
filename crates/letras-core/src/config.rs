//! Formatter configuration.
//!
//! Settings are loaded from environment variables with fallback to defaults.

use std::env;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;
use crate::DEFAULT_CONNECTOR;

/// Instance-level formatter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct FormatterConfig {
    /// Word joining integer and fractional phrases ("CON")
    pub connector: String,

    /// Shorten trailing UNO to UN (words and money modes only)
    pub apocope: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            connector: DEFAULT_CONNECTOR.to_string(),
            apocope: false,
        }
    }
}

impl FormatterConfig {
    /// Load configuration from environment variables.
    ///
    /// - `LETRAS_CONNECTOR` (default "CON")
    /// - `LETRAS_APOCOPE` (`true`/`false`/`1`/`0`, default false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connector = lookup("LETRAS_CONNECTOR")
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONNECTOR.to_string());

        let apocope = match lookup("LETRAS_APOCOPE") {
            None => false,
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("LETRAS_APOCOPE".to_string()))?,
        };

        Ok(FormatterConfig { connector, apocope })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FormatterConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, FormatterConfig::default());
        assert_eq!(config.connector, "CON");
        assert!(!config.apocope);
    }

    #[test]
    fn test_overrides() {
        let config = FormatterConfig::from_lookup(lookup_from(&[
            ("LETRAS_CONNECTOR", "Y"),
            ("LETRAS_APOCOPE", "true"),
        ]))
        .unwrap();
        assert_eq!(config.connector, "Y");
        assert!(config.apocope);
    }

    #[test]
    fn test_invalid_flag() {
        let err = FormatterConfig::from_lookup(lookup_from(&[("LETRAS_APOCOPE", "quizás")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("LETRAS_APOCOPE".to_string()));
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let config: FormatterConfig = serde_json::from_str(r#"{"apocope":true}"#).unwrap();
        assert_eq!(config.connector, "CON");
        assert!(config.apocope);
    }
}
