use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guild_config::{FeatureConfigDto, GuildConfigDto},
    },
    server::{
        document::ConfigNode, error::AppError, service::guild_config::GuildConfigService,
        state::AppState,
    },
};

/// Tag for grouping guild configuration endpoints in OpenAPI documentation
pub static GUILD_CONFIG_TAG: &str = "guild_config";

/// Get the effective configuration of a guild.
///
/// Returns the guild's stored settings merged over the defaults, so every setting the
/// dashboard knows about is present. Guilds that were never configured, or whose stored
/// settings cannot be read, get the defaults.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guild_id` - Discord guild ID to fetch the configuration for
///
/// # Returns
/// - `200 OK` - Full configuration document
/// - `400 Bad Request` - Empty guild ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/config",
    tag = GUILD_CONFIG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild configuration", body = GuildConfigDto),
        (status = 400, description = "Invalid guild ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let config = GuildConfigService::new(&state.db)
        .get_effective_config(&guild_id)
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// Save the feature configuration of a guild.
///
/// Replaces the guild's stored `features` section with the request body. Settings left out
/// of the body fall back to their defaults on the next read. The merged result is not
/// returned; clients re-fetch the configuration.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guild_id` - Discord guild ID to save the configuration for
/// - `payload` - Complete `features` section
///
/// # Returns
/// - `204 No Content` - Configuration saved
/// - `400 Bad Request` - Empty guild ID or body is not a JSON object
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/config/features",
    tag = GUILD_CONFIG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = FeatureConfigDto,
    responses(
        (status = 204, description = "Successfully saved feature configuration"),
        (status = 400, description = "Invalid guild ID or feature configuration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_feature_config(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    Json(payload): Json<FeatureConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    GuildConfigService::new(&state.db)
        .save_feature_config(&guild_id, ConfigNode::from(payload.0))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
