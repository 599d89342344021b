use crate::server::{
    document::{defaults, ConfigNode},
    error::{guild_config::GuildConfigError, AppError},
    model::guild_config::ConfigSource,
    service::guild_config::GuildConfigService,
};
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

mod save_feature_config;

fn bool_at(node: &ConfigNode, path: &[&str]) -> Option<bool> {
    node.get_path(path).and_then(ConfigNode::as_bool)
}

fn stored_document(row: &entity::guild_config::Model) -> Value {
    serde_json::from_str(row.settings.as_deref().unwrap()).unwrap()
}
