//! Recursive default-over-override merge.

use std::collections::BTreeMap;

use crate::server::document::node::ConfigNode;

/// Overlays a stored document onto the default document.
///
/// Object nodes in `stored` are merged key by key into the default at the same path, at every
/// depth. Scalars, arrays and nulls in `stored` replace the default outright. Keys only present
/// in the defaults are kept, and keys only present in `stored` are carried into the result.
///
/// When the default at a path is missing or is not an object, a stored object at that path is
/// merged against an empty object, i.e. it is taken as-is. A stored root that is not an object
/// replaces the defaults entirely.
///
/// # Arguments
/// - `defaults` - Default tree, typically from [`crate::server::document::defaults`]
/// - `stored` - Normalized stored document for the guild
///
/// # Returns
/// - `ConfigNode` - The effective configuration
pub fn merge(defaults: ConfigNode, stored: ConfigNode) -> ConfigNode {
    let ConfigNode::Object(overrides) = stored else {
        return stored;
    };

    let mut merged = match defaults {
        ConfigNode::Object(map) => map,
        _ => BTreeMap::new(),
    };

    for (key, value) in overrides {
        let value = match value {
            ConfigNode::Object(_) => {
                let base = merged.remove(&key).unwrap_or_else(ConfigNode::empty_object);
                merge(base, value)
            }
            leaf => leaf,
        };
        merged.insert(key, value);
    }

    ConfigNode::Object(merged)
}
