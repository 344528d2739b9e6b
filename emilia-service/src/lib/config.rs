use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub users: Vec<UserSeedConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

/// Directory entry hashed into the credential store at startup.
#[derive(Deserialize, Clone)]
pub struct UserSeedConfig {
    pub username: String,
    pub email: String,
    pub password: String,
    pub secret: String,
}

impl std::fmt::Debug for UserSeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSeedConfig")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl Config {
    const MIN_SECRET_BYTES: usize = 32;
    const MAX_EXPIRATION_MINUTES: i64 = 24 * 60;

    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot run safely with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < Self::MIN_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                Self::MIN_SECRET_BYTES
            )));
        }

        if self.jwt.expiration_minutes <= 0 {
            return Err(ConfigError::Message(
                "jwt.expiration_minutes must be positive".to_string(),
            ));
        }

        if self.jwt.expiration_minutes > Self::MAX_EXPIRATION_MINUTES {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be at most {}",
                Self::MAX_EXPIRATION_MINUTES
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, expiration_minutes: i64) -> Config {
        Config {
            server: ServerConfig { http_port: 8000 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_minutes,
            },
            users: Vec::new(),
        }
    }

    #[test]
    fn test_validate_accepts_default_shape() {
        let config = config("069d49a9c669ddc08f496352166b7b5d270ff64d3009fc297689aa8b0fb66d98", 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        assert!(config("too-short", 30).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_expiration() {
        let secret = "test-secret-key-for-jwt-signing-at-least-32-bytes";
        assert!(config(secret, 0).validate().is_err());
        assert!(config(secret, -5).validate().is_err());
    }

    #[test]
    fn test_validate_bounds_expiration() {
        let secret = "test-secret-key-for-jwt-signing-at-least-32-bytes";
        assert!(config(secret, 24 * 60).validate().is_ok());
        assert!(config(secret, 24 * 60 + 1).validate().is_err());
        assert!(config(secret, 1_000_000_000_000).validate().is_err());
    }

    #[test]
    fn test_seed_debug_hides_password_and_secret() {
        let seed = UserSeedConfig {
            username: "felix".to_string(),
            email: "felix.andreas@meetap.de".to_string(),
            password: "elm>javascript".to_string(),
            secret: "Rust 🦀 is the best programming language ever!".to_string(),
        };

        let rendered = format!("{:?}", seed);
        assert!(rendered.contains("felix"));
        assert!(!rendered.contains("elm>javascript"));
        assert!(!rendered.contains("Rust"));
    }
}
