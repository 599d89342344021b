//! Guild configuration factory for seeding stored configuration rows.
//!
//! The factory writes the `settings` column verbatim, so tests can seed well-formed
//! documents, double-serialized documents, or deliberately corrupted payloads.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configuration rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let row = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .settings(Some("{not json".to_string()))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    settings: Option<String>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - settings: `Some("{}")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildConfigFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            settings: Some("{}".to_string()),
        }
    }

    /// Sets the guild ID.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the raw `settings` column, written exactly as given.
    ///
    /// # Arguments
    /// - `settings` - Raw payload text, or `None` for a NULL column
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn settings(mut self, settings: Option<String>) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the `settings` column to the serialized form of a JSON value.
    ///
    /// # Arguments
    /// - `settings` - Document to serialize into the column
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn settings_json(mut self, settings: serde_json::Value) -> Self {
        self.settings = Some(settings.to_string());
        self
    }

    /// Builds and inserts the guild configuration row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let now = Utc::now();

        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            settings: ActiveValue::Set(self.settings),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration row with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::guild_config::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}

/// Creates a guild configuration row for a guild with the given stored document.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `settings` - Document to serialize into the `settings` column
///
/// # Returns
/// - `Ok(entity::guild_config::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_config_with_settings(
    db: &DatabaseConnection,
    guild_id: &str,
    settings: serde_json::Value,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db)
        .guild_id(guild_id)
        .settings_json(settings)
        .build()
        .await
}
