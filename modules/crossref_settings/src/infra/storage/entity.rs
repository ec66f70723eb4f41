//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Plugin settings table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "plugin_settings")]
pub struct Model {
    /// Owning plugin (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub plugin_name: String,

    /// Context ID (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub context_id: i64,

    /// Setting name (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub setting_name: String,

    /// Serialized value
    #[sea_orm(column_type = "Text", nullable)]
    pub setting_value: Option<String>,

    /// Type tag selecting the serialization ("string" or "bool")
    pub setting_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
