//! Configuration for crossref settings module

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Crossref settings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection string
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Registry name of the plugin owning the settings
    #[serde(default = "default_plugin_name")]
    pub plugin_name: String,

    /// Public base URL of the journal site, used for modal links
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Label of the DOI plugin settings link
    #[serde(default = "default_doi_settings_label")]
    pub doi_settings_label: String,

    /// Active plugins of the `pubIds` category
    #[serde(default)]
    pub pub_id_plugins: Vec<String>,

    /// Secret anti-forgery tokens are derived from
    #[serde(default)]
    pub csrf_secret: String,

    /// Run migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            plugin_name: default_plugin_name(),
            base_url: default_base_url(),
            doi_settings_label: default_doi_settings_label(),
            pub_id_plugins: Vec::new(),
            csrf_secret: String::new(),
            run_migrations: true,
        }
    }
}

impl Config {
    /// Defaults, then the YAML file (if given), then `CROSSREF__*` environment variables
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config: Config = figment.merge(Env::prefixed("CROSSREF__").split("__")).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the module cannot run safely with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.csrf_secret.trim().is_empty() {
            anyhow::bail!("csrf_secret must be set; anti-forgery tokens would be predictable");
        }
        Ok(())
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_plugin_name() -> String {
    "crossrefexportplugin".to_string()
}

fn default_base_url() -> String {
    "http://localhost/index.php/journal".to_string()
}

fn default_doi_settings_label() -> String {
    "DOI Plugin Settings".to_string()
}

fn default_true() -> bool {
    true
}
