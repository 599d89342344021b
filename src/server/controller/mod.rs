//! HTTP request handlers.

pub mod guild_config;
