//! Guild configuration document model.
//!
//! A guild's configuration is a tree of named sections. The tree is represented by
//! [`ConfigNode`], a tagged union of scalar, array and object nodes, so that deciding
//! whether a stored value is merged recursively or replaced outright is a matter of
//! matching on the node kind.
//!
//! - [`schema`] holds the typed default configuration and produces the default tree
//! - [`merge`] overlays a stored document onto the defaults
//! - [`node`] defines the tree itself and its JSON conversions

pub mod merge;
pub mod node;
pub mod schema;

pub use merge::merge;
pub use node::ConfigNode;
pub use schema::{defaults, GuildSettings};
