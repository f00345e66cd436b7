//! Load-time checks over the content tree and profile data.
//!
//! Nothing here is fatal. A broken `nextLevel` link means the node renders
//! without follow-up buttons; a shadowed id means flattening silently picks
//! the last definition. Both are worth a warning at startup.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::content_tree::ContentTree;
use super::profile::{Profile, PLACEHOLDER_MARKER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    /// A node advertises a follow-up level that no level in the tree defines.
    BrokenLink {
        level: String,
        node: String,
        target: String,
    },
    /// The same node id appears in more than one level; the last one wins
    /// during flattening.
    ShadowedId { id: String, levels: Vec<String> },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::BrokenLink {
                level,
                node,
                target,
            } => write!(
                f,
                "node '{}' in level '{}' links to missing level '{}'",
                node, level, target
            ),
            ContentWarning::ShadowedId { id, levels } => write!(
                f,
                "node id '{}' defined in levels [{}]; the last definition wins",
                id,
                levels.join(", ")
            ),
        }
    }
}

/// Walks every node and reports dangling `nextLevel` references and ids that
/// repeat across levels.
pub fn validate_tree(tree: &ContentTree) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();

    for level in &tree.levels {
        for node in &level.nodes {
            if let Some(target) = &node.next_level {
                if tree.level(target).is_none() {
                    warnings.push(ContentWarning::BrokenLink {
                        level: level.name.clone(),
                        node: node.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }

    let mut seen: HashMap<&str, Vec<&str>> = HashMap::new();
    for level in &tree.levels {
        for node in &level.nodes {
            seen.entry(&node.id).or_default().push(&level.name);
        }
    }
    let mut shadowed: Vec<ContentWarning> = seen
        .into_iter()
        .filter(|(_, levels)| levels.len() > 1)
        .map(|(id, levels)| ContentWarning::ShadowedId {
            id: id.to_string(),
            levels: levels.into_iter().map(str::to_string).collect(),
        })
        .collect();
    shadowed.sort_by(|a, b| match (a, b) {
        (ContentWarning::ShadowedId { id: a, .. }, ContentWarning::ShadowedId { id: b, .. }) => {
            a.cmp(b)
        }
        _ => std::cmp::Ordering::Equal,
    });
    warnings.extend(shadowed);

    warnings
}

/// How much of the profile is still template boilerplate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderCensus {
    pub text_fields: usize,
    pub placeholder_fields: usize,
}

impl PlaceholderCensus {
    pub fn is_mostly_placeholder(&self) -> bool {
        self.text_fields > 0 && self.placeholder_fields * 2 >= self.text_fields
    }
}

/// Counts string fields across the whole profile and how many of them still
/// carry the `[bracketed]` template marker.
pub fn placeholder_census(profile: &Profile) -> PlaceholderCensus {
    let mut census = PlaceholderCensus::default();
    // Infallible for a plain data struct; fall back to an empty census rather
    // than failing the load.
    if let Ok(value) = serde_json::to_value(profile) {
        walk(&value, &mut census);
    }
    census
}

fn walk(value: &Value, census: &mut PlaceholderCensus) {
    match value {
        Value::String(text) => {
            census.text_fields += 1;
            if text.contains(PLACEHOLDER_MARKER) {
                census.placeholder_fields += 1;
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, census);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                walk(item, census);
            }
        }
        _ => {}
    }
}
