//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services implement business
//! rules and coordinate repository calls, working with domain models rather than DTOs or
//! entity models.

pub mod guild_config;

#[cfg(test)]
mod test;
