use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::guild_config::{
        __path_get_guild_config, __path_save_feature_config, get_guild_config,
        save_feature_config,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guildboard API"),
    tags(
        (name = "guild_config", description = "Per-guild feature configuration")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_guild_config))
        .routes(routes!(save_feature_config))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
