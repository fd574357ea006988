//! API configuration

use core_kernel::CoreError;
use domain_split::LedgerOptions;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines instead of text
    pub log_json: bool,
    /// Idle time after which a session is discarded
    pub session_ttl_secs: u64,
    /// Upper bound on concurrently held sessions
    pub max_sessions: usize,
    /// Comma-separated names every new ledger starts with
    pub default_participants: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
            session_ttl_secs: 3600,
            max_sessions: 10_000,
            default_participants: String::new(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// Every field has a default, so only the `API_*` variables that are set
    /// need to be present.
    ///
    /// # Errors
    ///
    /// `CoreError::Configuration` if a variable cannot be read as its field's
    /// type or the result fails [`ApiConfig::validate`].
    pub fn from_env() -> Result<Self, CoreError> {
        let config = Self::load_env().map_err(|e| CoreError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn load_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .set_default("session_ttl_secs", defaults.session_ttl_secs)?
            .set_default("max_sessions", defaults.max_sessions as u64)?
            .set_default("default_participants", defaults.default_participants)?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Checks values the environment can express but the server cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_sessions == 0 {
            return Err(CoreError::configuration("max_sessions must be at least 1"));
        }
        if self.host.trim().is_empty() {
            return Err(CoreError::configuration("host must not be empty"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Names from `default_participants`, trimmed, blanks dropped
    pub fn default_participant_names(&self) -> Vec<String> {
        self.default_participants
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Options every session ledger is created with
    pub fn ledger_options(&self) -> LedgerOptions {
        LedgerOptions::default().with_default_participants(self.default_participant_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_participants_parsing() {
        let config = ApiConfig {
            default_participants: " Ali, ,Sara ,".to_string(),
            ..ApiConfig::default()
        };

        assert_eq!(config.default_participant_names(), vec!["Ali", "Sara"]);
    }

    #[test]
    fn test_no_default_participants() {
        assert!(ApiConfig::default().default_participant_names().is_empty());
    }

    #[test]
    fn test_validate() {
        assert_eq!(ApiConfig::default().validate(), Ok(()));

        let no_sessions = ApiConfig {
            max_sessions: 0,
            ..ApiConfig::default()
        };
        assert_eq!(
            no_sessions.validate(),
            Err(CoreError::configuration("max_sessions must be at least 1"))
        );

        let no_host = ApiConfig {
            host: " ".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(no_host.validate(), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_server_addr() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..ApiConfig::default()
        };

        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parsed_names_are_trimmed_and_non_blank(raw in "[ a-zA-Z,]{0,40}") {
                let config = ApiConfig {
                    default_participants: raw,
                    ..ApiConfig::default()
                };

                for name in config.default_participant_names() {
                    prop_assert!(!name.is_empty());
                    prop_assert_eq!(name.trim(), name.as_str());
                    prop_assert!(!name.contains(','));
                }
            }
        }
    }
}
