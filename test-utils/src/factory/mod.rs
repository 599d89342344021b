//! Factory methods for creating test data.
//!
//! This module provides factory methods for seeding stored guild configuration rows with
//! sensible defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Row with an empty document
//!     let row = factory::guild_config::create_guild_config(&db).await?;
//!
//!     // Row with a specific stored document
//!     let row = factory::guild_config::GuildConfigFactory::new(&db)
//!         .guild_id("123456789")
//!         .settings_json(serde_json::json!({ "features": {} }))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Create stored guild configuration rows
//! - `helpers` - Unique ID generation shared by factories

pub mod guild_config;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use guild_config::{create_guild_config, create_guild_config_with_settings};
