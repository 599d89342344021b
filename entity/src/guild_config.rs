use sea_orm::entity::prelude::*;

/// Stored configuration document for a single Discord guild.
///
/// `settings` holds the raw serialized document exactly as it was last written. It is kept as
/// plain text so that a corrupted payload can still be read back and recovered from.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub settings: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
