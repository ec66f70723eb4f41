//! Link to the DOI pub-id plugin's settings modal

use crate::contract::SettingsLinkAction;
use std::collections::BTreeSet;
use url::Url;

/// Registry name of the DOI pub-id plugin
pub const DOI_PLUGIN: &str = "doipubidplugin";

/// Plugin category of persistent identifier plugins
pub const PUB_IDS_CATEGORY: &str = "pubIds";

const SETTINGS_GRID_PATH: &str = "$$$call$$$/grid/settings/plugins/settings-plugin-grid/manage";

/// Active plugins of the `pubIds` category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PubIdPlugins {
    active: BTreeSet<String>,
}

impl PubIdPlugins {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains(name)
    }
}

/// Builds settings-grid launchers for sibling plugins
#[derive(Debug, Clone)]
pub struct SettingsLinkBuilder {
    base_url: Url,
    label: String,
}

impl SettingsLinkBuilder {
    pub fn new(base_url: &str, label: impl Into<String>) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            label: label.into(),
        })
    }

    /// Launcher for the settings grid of `plugin` in `category`
    pub fn settings_link(&self, plugin: &str, category: &str) -> anyhow::Result<SettingsLinkAction> {
        let mut url = self.base_url.join(SETTINGS_GRID_PATH)?;
        url.query_pairs_mut()
            .append_pair("plugin", plugin)
            .append_pair("category", category);

        Ok(SettingsLinkAction {
            id: "settings".to_string(),
            label: self.label.clone(),
            url: url.to_string(),
            modal_title: self.label.clone(),
        })
    }

    /// Launcher for the DOI plugin settings, when that plugin is active
    pub fn doi_settings_link(&self, plugins: &PubIdPlugins) -> anyhow::Result<Option<SettingsLinkAction>> {
        if !plugins.is_active(DOI_PLUGIN) {
            return Ok(None);
        }
        self.settings_link(DOI_PLUGIN, PUB_IDS_CATEGORY).map(Some)
    }
}
