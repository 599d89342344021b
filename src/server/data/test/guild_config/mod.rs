use crate::server::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{GuildId, RawConfigPayload},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod fetch_raw_config;
mod upsert_raw_config;

fn guild_id(raw: &str) -> GuildId {
    GuildId::parse(raw).unwrap()
}
