use serde::{Deserialize, Serialize};
use crate::utils::{BACKEND_URL, DEFAULT_JWT_STORAGE_KEY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub jwt_storage_key: String,
    /// Cuentas de prueba que nunca aparecen en el dashboard admin
    pub test_users: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            jwt_storage_key: DEFAULT_JWT_STORAGE_KEY.to_string(),
            test_users: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            jwt_storage_key: option_env!("JWT_STORAGE_KEY")
                .unwrap_or(DEFAULT_JWT_STORAGE_KEY).to_string(),
            test_users: parse_user_list(option_env!("TEST_USERS").unwrap_or("")),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn parse_user_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// Configuración global estática (solo la lee el arranque en el navegador)
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_test_user_list() {
        assert_eq!(
            parse_user_list(" employee@test.tld, ,admin@test.tld "),
            vec!["employee@test.tld".to_string(), "admin@test.tld".to_string()]
        );
        assert!(parse_user_list("").is_empty());
    }

    #[test]
    fn logging_switch_selects_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
        assert!(!config.is_production());
    }
}
