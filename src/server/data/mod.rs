//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. All database queries and writes go through
//! these repositories.

pub mod guild_config;

#[cfg(test)]
mod test;
