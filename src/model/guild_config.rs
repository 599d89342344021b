use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Effective configuration of a guild, serialized as the bare merged document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct GuildConfigDto(pub serde_json::Value);

/// Replacement `features` section submitted by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct FeatureConfigDto(pub serde_json::Value);
