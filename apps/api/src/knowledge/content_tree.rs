//! Content tree: the progressive-disclosure structure behind button actions.
//!
//! Levels are declared in order; the order matters. `flattened()` merges every
//! level into one id→node map where a later level silently overwrites an
//! earlier one on an id collision, so only the declared order decides which
//! node wins. The load-time validator reports those collisions, plus
//! `nextLevel` references that name no declared level.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The one level whose nodes are looked up before anything else and are
/// therefore immune to shadowing by deeper levels.
pub const OVERVIEW_LEVEL: &str = "overview";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentTree {
    pub levels: Vec<ContentLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentLevel {
    pub name: String,
    pub nodes: Vec<ContentNode>,
}

/// One disclosure step: what to say, what the button offering it reads, and
/// which level (if any) the visitor can descend into next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub next_level: Option<String>,
}

/// A flattened-lookup hit, carrying where in the tree the winning node sits.
#[derive(Debug, Clone, Copy)]
pub struct FlatEntry<'a> {
    /// 1-based position of the winning level in declaration order.
    pub level: usize,
    pub level_name: &'a str,
    pub node: &'a ContentNode,
}

impl ContentLevel {
    pub fn node(&self, id: &str) -> Option<&ContentNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

impl ContentTree {
    pub fn level(&self, name: &str) -> Option<&ContentLevel> {
        self.levels.iter().find(|l| l.name == name)
    }

    /// Merges all levels into one id→node map. Later levels overwrite earlier
    /// ones on id collisions, mirroring an object-spread merge.
    pub fn flattened(&self) -> HashMap<&str, FlatEntry<'_>> {
        let mut flat = HashMap::new();
        for (index, level) in self.levels.iter().enumerate() {
            for node in &level.nodes {
                flat.insert(
                    node.id.as_str(),
                    FlatEntry {
                        level: index + 1,
                        level_name: level.name.as_str(),
                        node,
                    },
                );
            }
        }
        flat
    }

    /// True if the id resolves anywhere in the tree.
    pub fn contains(&self, id: &str) -> bool {
        self.levels.iter().any(|l| l.node(id).is_some())
    }
}
