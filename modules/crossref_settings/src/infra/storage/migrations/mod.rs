//! Database migrations for plugin settings

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_plugin_settings::Migration)]
    }
}

mod m20250101_000001_create_plugin_settings {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PluginSettings::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(PluginSettings::PluginName).string().not_null())
                        .col(ColumnDef::new(PluginSettings::ContextId).big_integer().not_null())
                        .col(ColumnDef::new(PluginSettings::SettingName).string().not_null())
                        .col(ColumnDef::new(PluginSettings::SettingValue).text())
                        .col(
                            ColumnDef::new(PluginSettings::SettingType)
                                .string_len(6)
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(PluginSettings::PluginName)
                                .col(PluginSettings::ContextId)
                                .col(PluginSettings::SettingName),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_plugin_settings_context_id")
                        .table(PluginSettings::Table)
                        .col(PluginSettings::ContextId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PluginSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PluginSettings {
        Table,
        PluginName,
        ContextId,
        SettingName,
        SettingValue,
        SettingType,
    }
}
