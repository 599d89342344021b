//! Guild configuration service.
//!
//! Produces the effective configuration of a guild by merging its stored document over the
//! schema defaults, and persists feature saves. Every call re-reads storage; nothing is
//! cached between calls and concurrent saves for the same guild resolve as last write wins.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_config::GuildConfigRepository,
    document::{defaults, merge, ConfigNode},
    error::guild_config::GuildConfigError,
    model::guild_config::{
        ConfigSource, EffectiveConfig, GuildId, RawConfigPayload, StoredConfig, FEATURES_KEY,
    },
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the effective configuration for a guild.
    ///
    /// A guild with nothing stored gets the defaults. A stored payload that cannot be decoded
    /// is logged and replaced by the defaults, tagged `ConfigSource::Recovered`. Reading never
    /// writes back to storage.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as received from the caller
    ///
    /// # Returns
    /// - `Ok(EffectiveConfig)` - Fully populated configuration
    /// - `Err(GuildConfigError::InvalidGuildId)` - Guild ID is empty; storage was not touched
    /// - `Err(GuildConfigError::Persistence)` - Storage failed
    pub async fn get_effective_config(
        &self,
        guild_id: &str,
    ) -> Result<EffectiveConfig, GuildConfigError> {
        let guild_id = GuildId::parse(guild_id)?;

        let config = match self.load(&guild_id).await? {
            StoredConfig::Absent => EffectiveConfig::defaults(ConfigSource::Defaults),
            StoredConfig::Present(stored) => {
                let config = EffectiveConfig::new(merge(defaults(), stored), ConfigSource::Stored);
                if let Err(err) = config.settings() {
                    tracing::warn!(
                        "Stored configuration for guild {} has mistyped settings: {}",
                        guild_id,
                        err
                    );
                }
                config
            }
            StoredConfig::Malformed(err) => {
                tracing::warn!(
                    "Stored configuration for guild {} is malformed, using defaults: {}",
                    guild_id,
                    err
                );
                EffectiveConfig::defaults(ConfigSource::Recovered)
            }
        };

        tracing::debug!(
            "Loaded configuration for guild {} ({:?})",
            guild_id,
            config.source
        );

        Ok(config)
    }

    /// Replaces the `features` section of a guild's stored document.
    ///
    /// The rest of the stored document is kept as stored; the new section is not merged with
    /// the old one. A malformed stored payload is discarded and the document starts over from
    /// an empty object. The result is upserted, creating the guild's row on first save.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as received from the caller
    /// - `features` - Complete replacement for the `features` section
    ///
    /// # Returns
    /// - `Ok(())` - Document persisted
    /// - `Err(GuildConfigError::InvalidGuildId)` - Guild ID is empty; storage was not touched
    /// - `Err(GuildConfigError::InvalidFeatureConfig)` - `features` is not an object
    /// - `Err(GuildConfigError::Persistence)` - Storage failed
    pub async fn save_feature_config(
        &self,
        guild_id: &str,
        features: ConfigNode,
    ) -> Result<(), GuildConfigError> {
        let guild_id = GuildId::parse(guild_id)?;

        if !features.is_object() {
            return Err(GuildConfigError::InvalidFeatureConfig(features.kind()));
        }

        let mut document = match self.load(&guild_id).await? {
            StoredConfig::Absent => ConfigNode::empty_object(),
            StoredConfig::Present(stored) => stored,
            StoredConfig::Malformed(err) => {
                tracing::warn!(
                    "Discarding malformed stored configuration for guild {}: {}",
                    guild_id,
                    err
                );
                ConfigNode::empty_object()
            }
        };

        document.insert(FEATURES_KEY, features);

        GuildConfigRepository::new(self.db)
            .upsert_raw_config(&guild_id, RawConfigPayload::from_node(document))
            .await?;

        tracing::debug!("Saved feature configuration for guild {}", guild_id);

        Ok(())
    }

    async fn load(&self, guild_id: &GuildId) -> Result<StoredConfig, GuildConfigError> {
        let raw = GuildConfigRepository::new(self.db)
            .fetch_raw_config(guild_id)
            .await?;

        Ok(StoredConfig::from_raw(raw))
    }
}
