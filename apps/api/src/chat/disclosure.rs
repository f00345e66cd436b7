//! Progressive-disclosure resolution for button actions.
//!
//! The overview level is consulted before anything else, so its nodes cannot
//! be shadowed by deeper levels. Everything else goes through the flattened
//! id map, where the last declared level wins a collision. Only an overview
//! hit on the "work" node raises the carousel flag.

use crate::knowledge::content_tree::{ContentNode, ContentTree, OVERVIEW_LEVEL};

use super::models::{ButtonVariant, ChatButton, DisclosureMeta, MessageContent};

/// Served when an action id resolves nowhere in the tree.
pub const UNKNOWN_ACTION_REPLY: &str =
    "I'd be happy to help you learn more! What specific aspect interests you?";

/// Looks an action id up in the tree and builds the reply payload: the
/// node's text, follow-up buttons for its next level, and metadata recording
/// where the hit came from.
pub fn resolve(action: &str, tree: &ContentTree) -> MessageContent {
    for (index, level) in tree.levels.iter().enumerate() {
        if level.name != OVERVIEW_LEVEL {
            continue;
        }
        if let Some(node) = level.node(action) {
            return MessageContent {
                message: format_node(node),
                buttons: follow_up_buttons(node, tree),
                portfolio: action == "work",
                metadata: Some(DisclosureMeta {
                    level: index + 1,
                    section: OVERVIEW_LEVEL.to_string(),
                }),
                ..MessageContent::default()
            };
        }
    }

    let flat = tree.flattened();
    if let Some(entry) = flat.get(action) {
        return MessageContent {
            message: format_node(entry.node),
            buttons: follow_up_buttons(entry.node, tree),
            metadata: Some(DisclosureMeta {
                level: entry.level,
                section: entry.level_name.to_string(),
            }),
            ..MessageContent::default()
        };
    }

    MessageContent::plain(UNKNOWN_ACTION_REPLY)
}

fn format_node(node: &ContentNode) -> String {
    format!("**{}**\n\n{}", node.title, node.description)
}

/// One button per node of the referenced next level. A terminal node, or a
/// `nextLevel` naming a level nobody authored, yields no buttons.
fn follow_up_buttons(node: &ContentNode, tree: &ContentTree) -> Vec<ChatButton> {
    let next = match node.next_level.as_deref() {
        Some(next) => next,
        None => return Vec::new(),
    };
    match tree.level(next) {
        Some(level) => level
            .nodes
            .iter()
            .map(|n| {
                ChatButton::new(
                    format!("btn_{}", n.id),
                    n.button_text.clone(),
                    n.id.clone(),
                    ButtonVariant::Secondary,
                )
            })
            .collect(),
        None => Vec::new(),
    }
}
