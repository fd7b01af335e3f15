//! Application configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Site title, used in logs and the list command header
    pub title: String,

    /// `development` or `production`; development exposes raw upstream
    /// error details in API error responses
    pub environment: String,

    /// Server bind settings
    pub server: ServerConfig,

    /// Content source settings
    pub notion: NotionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            environment: "development".to_string(),
            server: ServerConfig::default(),
            notion: NotionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Let environment variables override secrets from the config file
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("NOTION_TOKEN") {
            self.notion.token = token;
        }
        if let Ok(database_id) = std::env::var("NOTION_DATABASE_ID") {
            self.notion.database_id = database_id;
        }
    }

    /// Whether API error responses should carry raw error details
    pub fn is_development(&self) -> bool {
        self.environment != "production"
    }
}

/// Server bind configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

/// Notion content source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// API token; the NOTION_TOKEN environment variable takes precedence
    pub token: String,

    /// Database holding the posts; NOTION_DATABASE_ID takes precedence
    pub database_id: String,

    /// Notion-Version header sent with every request
    pub version: String,

    /// API base URL, overridable for tests
    pub api_base: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            database_id: String::new(),
            version: "2022-06-28".to_string(),
            api_base: "https://api.notion.com/v1".to_string(),
        }
    }
}
