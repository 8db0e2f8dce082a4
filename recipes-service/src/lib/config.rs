use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. `JWT_SECRET` for the signing secret
    /// 2. `RECIPES_`-prefixed environment variables (RECIPES_DATABASE__URL,
    ///    RECIPES_SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// Fails when no signing secret ends up configured.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: RECIPES_DATABASE__URL=postgres://... overrides database.url
            .add_source(
                Environment::with_prefix("RECIPES")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("jwt.secret", env::var("JWT_SECRET").ok())?
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations that cannot sign tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret is not set (use JWT_SECRET or RECIPES_JWT__SECRET)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn config_with_secret(secret: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/recipes".to_string(),
            },
            redis: RedisConfig {
                url: "redis://localhost:6379/0".to_string(),
            },
            server: ServerConfig { http_port: 8080 },
            jwt: JwtConfig {
                secret: secret.to_string(),
            },
        }
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        assert!(config_with_secret("").validate().is_err());
        assert!(config_with_secret("   ").validate().is_err());
    }

    #[test]
    fn test_present_secret_is_accepted() {
        assert!(config_with_secret("s3cret").validate().is_ok());
    }

    // Tests below mutate the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_secret_env() {
        env::remove_var("JWT_SECRET");
        env::remove_var("RECIPES_JWT__SECRET");
    }

    #[test]
    fn test_load_fails_without_secret() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_secret_env();

        let result = Config::load();

        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_load_legacy_secret_wins() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_secret_env();
        env::set_var("RECIPES_JWT__SECRET", "from-prefixed");
        env::set_var("JWT_SECRET", "from-legacy");

        let result = Config::load();
        clear_secret_env();

        assert_eq!(result.unwrap().jwt.secret, "from-legacy");
    }

    #[test]
    fn test_load_ignores_unprefixed_variables() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_secret_env();
        env::set_var("RECIPES_JWT__SECRET", "from-prefixed");
        env::set_var("SERVER", "not-a-table");

        let result = Config::load();
        clear_secret_env();
        env::remove_var("SERVER");

        let config = result.unwrap();
        assert_eq!(config.jwt.secret, "from-prefixed");
        assert_eq!(config.server.http_port, 8080);
    }
}
