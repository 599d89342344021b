//! Data transfer objects shared with dashboard clients.

pub mod api;
pub mod guild_config;
