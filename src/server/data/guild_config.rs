//! Guild configuration data repository for database operations.
//!
//! This module provides the `GuildConfigRepository` for reading and writing the raw stored
//! configuration document of each guild. The repository does not interpret the payload: it
//! hands back whatever text is stored and writes whatever payload it is given, keyed
//! uniquely by guild ID.

use chrono::Utc;
use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::guild_config::{GuildId, RawConfigPayload};

/// Repository providing database operations for stored guild configuration documents.
pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    /// Creates a new GuildConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildConfigRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the last persisted payload for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(RawConfigPayload))` - Row exists with a non-NULL payload
    /// - `Ok(None)` - No row for this guild, or the payload column is NULL
    /// - `Err(DbErr)` - Database error during query
    pub async fn fetch_raw_config(
        &self,
        guild_id: &GuildId,
    ) -> Result<Option<RawConfigPayload>, DbErr> {
        let entity = entity::prelude::GuildConfig::find_by_id(guild_id.as_str().to_string())
            .one(self.db)
            .await?;

        Ok(entity.and_then(RawConfigPayload::from_entity))
    }

    /// Inserts or overwrites the payload for a guild.
    ///
    /// Creates the row on first write. When a row already exists for the guild, its payload
    /// and `updated_at` are overwritten and `created_at` is left as it was.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `payload` - Payload to persist
    ///
    /// # Returns
    /// - `Ok(())` - Payload persisted
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_raw_config(
        &self,
        guild_id: &GuildId,
        payload: RawConfigPayload,
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::GuildConfig::insert(entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.as_str().to_string()),
            settings: ActiveValue::Set(Some(payload.into_column())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .update_columns([
                    entity::guild_config::Column::Settings,
                    entity::guild_config::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
