//! SeaORM entity models for the guild configuration tables.

pub mod prelude;

pub mod guild_config;
