//! Domain models for guild configuration operations.
//!
//! Defines the validated guild identifier, the raw payload exchanged with storage, and the
//! effective configuration handed back to callers.

use std::fmt;

use serde_json::Value;

use crate::{
    model::guild_config::GuildConfigDto,
    server::{
        document::{defaults, ConfigNode, GuildSettings},
        error::guild_config::{GuildConfigError, MalformedStoredConfig},
    },
};

/// Key of the section replaced by feature saves.
pub const FEATURES_KEY: &str = "features";

/// Non-empty Discord guild identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildId(String);

impl GuildId {
    /// Validates a raw guild identifier.
    ///
    /// # Arguments
    /// - `raw` - Identifier as received from the caller
    ///
    /// # Returns
    /// - `Ok(GuildId)` - Identifier kept exactly as given, so distinct inputs never share a row
    /// - `Err(GuildConfigError::InvalidGuildId)` - Identifier is empty or only whitespace
    pub fn parse(raw: &str) -> Result<Self, GuildConfigError> {
        if raw.trim().is_empty() {
            return Err(GuildConfigError::InvalidGuildId);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Untrusted configuration payload as exchanged with storage.
///
/// Older rows hold the document as serialized text, and some hold it serialized twice (a
/// JSON string literal wrapping the document). Both forms are accepted on read.
#[derive(Debug, Clone, PartialEq)]
pub enum RawConfigPayload {
    /// Document serialized to text.
    Serialized(String),
    /// Document that is already structured JSON.
    Structured(Value),
}

impl RawConfigPayload {
    /// Converts an entity model to a raw payload at the repository boundary.
    ///
    /// # Returns
    /// - `Some(RawConfigPayload::Serialized)` - The row has a `settings` value
    /// - `None` - The `settings` column is NULL
    pub fn from_entity(entity: entity::guild_config::Model) -> Option<Self> {
        entity.settings.map(Self::Serialized)
    }

    /// Wraps a document for persistence.
    pub fn from_node(node: ConfigNode) -> Self {
        Self::Structured(node.into())
    }

    /// Serializes the payload for the `settings` column.
    ///
    /// Serialized payloads are written verbatim.
    pub fn into_column(self) -> String {
        match self {
            Self::Serialized(text) => text,
            Self::Structured(value) => value.to_string(),
        }
    }

    /// Normalizes the payload into a document tree.
    ///
    /// # Returns
    /// - `Ok(Some(ConfigNode))` - Payload decoded to a JSON object
    /// - `Ok(None)` - Payload is empty, blank or JSON `null`
    /// - `Err(MalformedStoredConfig)` - Payload is not JSON, or its root is not an object
    pub fn normalize(self) -> Result<Option<ConfigNode>, MalformedStoredConfig> {
        let value = match self {
            Self::Serialized(text) => match decode_text(&text)? {
                Value::String(inner) => decode_text(&inner)?,
                value => value,
            },
            Self::Structured(Value::String(inner)) => decode_text(&inner)?,
            Self::Structured(value) => value,
        };

        match value {
            Value::Null => Ok(None),
            Value::Object(_) => Ok(Some(ConfigNode::from(value))),
            other => Err(MalformedStoredConfig::NotAnObject(
                ConfigNode::from(other).kind(),
            )),
        }
    }
}

fn decode_text(text: &str) -> Result<Value, MalformedStoredConfig> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(text)?)
}

/// Outcome of loading a guild's stored document.
///
/// Keeps "never configured" apart from "configured but unreadable" so that each caller can
/// decide how to recover.
#[derive(Debug)]
pub enum StoredConfig {
    /// No row, or the row holds an empty payload.
    Absent,
    /// Stored document decoded successfully.
    Present(ConfigNode),
    /// Stored payload could not be decoded.
    Malformed(MalformedStoredConfig),
}

impl StoredConfig {
    /// Classifies a payload fetched from storage.
    pub fn from_raw(raw: Option<RawConfigPayload>) -> Self {
        match raw.map(RawConfigPayload::normalize) {
            None | Some(Ok(None)) => Self::Absent,
            Some(Ok(Some(document))) => Self::Present(document),
            Some(Err(err)) => Self::Malformed(err),
        }
    }
}

/// Where an effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Nothing stored; the document is exactly the defaults.
    Defaults,
    /// Stored overrides merged over the defaults.
    Stored,
    /// Stored payload was malformed; the document is exactly the defaults.
    Recovered,
}

/// Fully populated configuration for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    /// The merged document.
    pub document: ConfigNode,
    /// How the document was produced.
    pub source: ConfigSource,
}

impl EffectiveConfig {
    pub fn new(document: ConfigNode, source: ConfigSource) -> Self {
        Self { document, source }
    }

    /// Effective configuration consisting of the defaults alone.
    pub fn defaults(source: ConfigSource) -> Self {
        Self::new(defaults(), source)
    }

    /// Reads the document as typed settings.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored overrides all have the schema's types
    /// - `Err(serde_json::Error)` - An override has the wrong type for its path
    pub fn settings(&self) -> Result<GuildSettings, serde_json::Error> {
        GuildSettings::from_node(self.document.clone())
    }

    /// Converts the effective configuration into its response DTO.
    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto(self.document.into())
    }
}
