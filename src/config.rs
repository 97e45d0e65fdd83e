use crate::error::AppError;
use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.opendota.com/api";

// Cheng "NothingToSay" Jin Xiang - account used to resolve the most
// recent match when no match ID is given.
pub const DEFAULT_ACCOUNT_ID: u64 = 111620041;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub default_account_id: u64,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_base = env::var("OPENDOTA_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let default_account_id = match env::var("DOTA_DEFAULT_ACCOUNT") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "DOTA_DEFAULT_ACCOUNT must be a numeric account ID, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_ACCOUNT_ID,
        };

        let api_key = env::var("OPENDOTA_API_KEY").ok().filter(|k| !k.is_empty());

        Ok(Config {
            api_base,
            default_account_id,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn test_from_env() {
        env::remove_var("OPENDOTA_API_URL");
        env::remove_var("DOTA_DEFAULT_ACCOUNT");
        env::remove_var("OPENDOTA_API_KEY");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.default_account_id, DEFAULT_ACCOUNT_ID);
        assert!(config.api_key.is_none());

        env::set_var("DOTA_DEFAULT_ACCOUNT", "86745912");
        let config = Config::from_env().unwrap();
        assert_eq!(config.default_account_id, 86745912);

        env::set_var("DOTA_DEFAULT_ACCOUNT", "not-a-number");
        assert!(Config::from_env().is_err());

        env::remove_var("DOTA_DEFAULT_ACCOUNT");
    }
}
