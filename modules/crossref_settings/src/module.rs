//! Module wiring: config, database, migrations, service and routes

use crate::config::Config;
use crate::contract::PluginHandle;
use crate::domain::{PubIdPlugins, SecretCsrfVerifier, Service, SettingsLinkBuilder, SettingsStore};
use crate::infra::storage::{migrations::Migrator, repositories::SeaOrmPluginSettingsRepository};
use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Crossref settings module
pub struct CrossrefSettingsModule {
    config: Config,
    service: Arc<Service>,
}

impl CrossrefSettingsModule {
    /// Connect to the configured database and build the module
    pub async fn init(config: Config) -> Result<Self> {
        let db = Database::connect(&config.database_url).await?;
        Self::with_connection(config, db).await
    }

    /// Build the module on an existing connection
    pub async fn with_connection(config: Config, db: DatabaseConnection) -> Result<Self> {
        config.validate()?;
        if config.run_migrations {
            Migrator::up(&db, None).await?;
            tracing::info!("Crossref settings migrations completed");
        }

        let store: Arc<dyn SettingsStore> = Arc::new(SeaOrmPluginSettingsRepository::new(
            Arc::new(db),
            config.plugin_name.clone(),
        ));
        Self::with_store(config, store)
    }

    /// Build the module on any settings store
    pub fn with_store(config: Config, store: Arc<dyn SettingsStore>) -> Result<Self> {
        config.validate()?;
        let links = SettingsLinkBuilder::new(&config.base_url, config.doi_settings_label.clone())?;
        let csrf = Arc::new(SecretCsrfVerifier::new(config.csrf_secret.clone()));
        let pub_id_plugins = if config.pub_id_plugins.is_empty() {
            None
        } else {
            Some(PubIdPlugins::new(config.pub_id_plugins.iter().cloned()))
        };

        let mut plugin = PluginHandle::crossref();
        plugin.name = config.plugin_name.clone();

        let service = Arc::new(Service::new(plugin, store, csrf, pub_id_plugins, links));
        tracing::info!(plugin = %config.plugin_name, "Crossref settings initialized");

        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Arc<dyn crate::contract::CrossrefSettingsApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }

    /// Register REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering crossref settings REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}
