//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Form-intake endpoint for the contact forms
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/xyzlnbnw";

/// Form-intake endpoint for the newsletter signup
pub const DEFAULT_NEWSLETTER_ENDPOINT: &str = "https://formspree.io/f/mldapalr";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FolioConfig {
    /// Contact form endpoint
    pub contact_endpoint: Option<String>,
    /// Newsletter signup endpoint
    pub newsletter_endpoint: Option<String>,
    /// Profile image checked on startup
    pub profile_image_url: Option<String>,
}

impl FolioConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "folio", "folio-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the optional site content override
    pub fn content_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("content.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(
            std::env::var("FOLIO_CONTACT_ENDPOINT").ok(),
            std::env::var("FOLIO_NEWSLETTER_ENDPOINT").ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FolioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Non-empty environment values win over the file
    fn apply_overrides(&mut self, contact: Option<String>, newsletter: Option<String>) {
        if let Some(url) = contact.filter(|u| !u.trim().is_empty()) {
            self.contact_endpoint = Some(url);
        }
        if let Some(url) = newsletter.filter(|u| !u.trim().is_empty()) {
            self.newsletter_endpoint = Some(url);
        }
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn contact_endpoint(&self) -> &str {
        self.contact_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_CONTACT_ENDPOINT)
    }

    pub fn newsletter_endpoint(&self) -> &str {
        self.newsletter_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_NEWSLETTER_ENDPOINT)
    }
}
