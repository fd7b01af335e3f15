//! quill-rs: a blog content API server backed by Notion
//!
//! This crate fetches blog posts and their content blocks from a Notion
//! database, validates them, converts the blocks to markdown, and serves
//! the result as JSON over HTTP.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod notion;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main Quill application
#[derive(Clone)]
pub struct Quill {
    /// Application configuration
    pub config: config::AppConfig,
    /// Notion API client, constructed once at startup and shared
    pub notion: notion::NotionClient,
}

impl Quill {
    /// Create a new Quill instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::AppConfig::load(&config_path)?
        } else {
            config::AppConfig::default()
        };

        Self::with_config(config)
    }

    /// Create a Quill instance from an already-loaded configuration
    pub fn with_config(mut config: config::AppConfig) -> Result<Self> {
        config.apply_env_overrides();
        let notion = notion::NotionClient::new(&config.notion)?;
        Ok(Self { config, notion })
    }

    /// Start the API server
    pub async fn serve(&self, ip: &str, port: u16) -> Result<()> {
        server::start(self, ip, port).await
    }

    /// List published posts to stdout
    pub async fn list(&self) -> Result<()> {
        commands::list::run(self).await
    }
}
