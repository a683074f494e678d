use serde::{Deserialize, Serialize};
use std::env;

use crate::schema::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub validation: ValidationConfig,
    pub docs: DocsConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings handed to the request validator.
///
/// Built once at start-up and carried in application state; the validator
/// never reads process-wide settings on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub locale: Locale,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { locale: Locale::Ja }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    pub title: String,
    pub version: String,
    pub description: String,
    pub server_url: String,
    pub server_description: String,
    /// Path the generated document is served from; the reference UI fetches it here.
    pub openapi_path: String,
    pub ui_theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("AUTH_API_HOST") {
            self.server.host = v;
        }
        if let Some(port) = env::var("AUTH_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Validation overrides
        if let Ok(v) = env::var("VALIDATION_LOCALE") {
            self.validation.locale = v.parse().unwrap_or(self.validation.locale);
        }

        // Docs overrides
        if let Ok(v) = env::var("DOCS_SERVER_URL") {
            self.docs.server_url = v;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }

        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8787,
            },
            validation: ValidationConfig::default(),
            docs: DocsConfig::default(),
            security: SecurityConfig { enable_cors: true },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8787,
            },
            validation: ValidationConfig::default(),
            docs: DocsConfig::default(),
            security: SecurityConfig { enable_cors: true },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8787,
            },
            validation: ValidationConfig::default(),
            docs: DocsConfig::default(),
            security: SecurityConfig { enable_cors: false },
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: "tsuki-lab-auth API".to_string(),
            version: "1.0.0".to_string(),
            description: "hanetsukiの個人開発 認証App API".to_string(),
            server_url: "http://localhost:8787".to_string(),
            server_description: "Local Server".to_string(),
            openapi_path: "/openapi".to_string(),
            ui_theme: "saturn".to_string(),
        }
    }
}
