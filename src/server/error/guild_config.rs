//! Errors raised while reading or writing a guild's configuration document.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum GuildConfigError {
    /// Guild identifier is empty or only whitespace.
    ///
    /// Raised before any storage call is made. Results in 400 Bad Request.
    #[error("Guild ID must not be empty")]
    InvalidGuildId,

    /// Submitted feature configuration is not a JSON object.
    ///
    /// The `features` section is replaced wholesale on save, so anything other than an
    /// object would discard every feature setting. Results in 400 Bad Request.
    #[error("Feature configuration must be a JSON object, got {0}")]
    InvalidFeatureConfig(&'static str),

    /// The storage layer failed (connectivity, constraint violation, ...).
    ///
    /// Not retried. Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    Persistence(#[from] sea_orm::DbErr),
}

/// A stored configuration payload that could not be turned into a document.
///
/// Never surfaced to callers: reads fall back to the defaults and writes start over from an
/// empty document.
#[derive(Error, Debug)]
pub enum MalformedStoredConfig {
    /// Payload text is not valid JSON.
    #[error("stored configuration is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Payload is valid JSON but its root is not an object.
    #[error("stored configuration root is {0}, expected an object")]
    NotAnObject(&'static str),
}

/// Converts guild configuration errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidGuildId` and `InvalidFeatureConfig`
/// - 500 Internal Server Error - For `Persistence`, with a generic message
impl IntoResponse for GuildConfigError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidGuildId | Self::InvalidFeatureConfig(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Persistence(err) => InternalServerError(err).into_response(),
        }
    }
}
