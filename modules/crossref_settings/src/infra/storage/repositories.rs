//! SeaORM repository implementations

use crate::contract::{ContextId, FieldKind, FieldValue, SettingEntry};
use crate::domain::repository::SettingsStore;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait,
};
use std::sync::Arc;

use super::{entity, mapper};

// ===== Plugin Settings Repository =====

/// Settings of one plugin, stored in the `plugin_settings` table
pub struct SeaOrmPluginSettingsRepository {
    db: Arc<DatabaseConnection>,
    plugin_name: String,
}

impl SeaOrmPluginSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>, plugin_name: impl Into<String>) -> Self {
        Self {
            db,
            plugin_name: plugin_name.into(),
        }
    }

    async fn upsert<C: ConnectionTrait>(
        &self,
        conn: &C,
        context_id: ContextId,
        key: &str,
        value: &FieldValue,
        kind: FieldKind,
    ) -> Result<()> {
        let active = mapper::to_active_model(&self.plugin_name, context_id, key, value, kind);

        entity::Entity::insert(active)
            .on_conflict(
                OnConflict::columns([
                    entity::Column::PluginName,
                    entity::Column::ContextId,
                    entity::Column::SettingName,
                ])
                .update_columns([entity::Column::SettingValue, entity::Column::SettingType])
                .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SettingsStore for SeaOrmPluginSettingsRepository {
    async fn get(&self, context_id: ContextId, key: &str) -> Result<Option<FieldValue>> {
        let result = entity::Entity::find_by_id((self.plugin_name.clone(), context_id, key.to_string()))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn set(
        &self,
        context_id: ContextId,
        key: &str,
        value: &FieldValue,
        kind: FieldKind,
    ) -> Result<()> {
        self.upsert(&*self.db, context_id, key, value, kind).await
    }

    async fn set_many(&self, context_id: ContextId, entries: &[SettingEntry]) -> Result<()> {
        let txn = self.db.begin().await?;

        for entry in entries {
            // Dropping the transaction on error rolls it back
            self.upsert(&txn, context_id, entry.name, &entry.value, entry.kind)
                .await?;
        }

        txn.commit().await?;
        tracing::debug!(
            plugin = %self.plugin_name,
            context_id,
            count = entries.len(),
            "Plugin settings written"
        );
        Ok(())
    }
}
