// Knowledge base: static profile + progressive-disclosure content tree.
// Loaded once at startup; route handlers and the terminal client share it
// through Arc<Knowledge>. Data files are optional on disk, with embedded
// template copies as the fallback.

pub mod contact;
pub mod content_tree;
pub mod profile;
pub mod validation;

pub use contact::ContactInfo;
pub use content_tree::{ContentNode, ContentTree, OVERVIEW_LEVEL};
pub use profile::Profile;
pub use validation::ContentWarning;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use self::validation::{placeholder_census, validate_tree};

pub const PORTFOLIO_FILE: &str = "portfolio.json";
pub const ASSISTANT_FILE: &str = "assistant.json";

const EMBEDDED_PORTFOLIO: &str = include_str!("../../data/portfolio.json");
const EMBEDDED_ASSISTANT: &str = include_str!("../../data/assistant.json");

/// Shape of `assistant.json`: the content tree plus the contact card.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantData {
    #[serde(default)]
    pub content: ContentTree,
    #[serde(default)]
    pub contact: ContactInfo,
}

/// Everything the chat can say, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Knowledge {
    pub profile: Profile,
    pub tree: ContentTree,
    pub contact: ContactInfo,
    /// Findings from the load-time tree checks, kept for the health probe.
    pub warnings: Vec<ContentWarning>,
}

impl Knowledge {
    /// Assembles the knowledge base from already-parsed parts and runs the
    /// load-time checks over the tree.
    pub fn from_parts(profile: Profile, assistant: AssistantData) -> Self {
        let warnings = validate_tree(&assistant.content);
        Knowledge {
            profile,
            tree: assistant.content,
            contact: assistant.contact,
            warnings,
        }
    }

    /// Loads both data files from `data_dir`. A missing file falls back to the
    /// embedded template copy; a present-but-malformed file is a hard error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let profile: Profile = read_data_file(data_dir, PORTFOLIO_FILE, EMBEDDED_PORTFOLIO)?;
        let assistant: AssistantData =
            read_data_file(data_dir, ASSISTANT_FILE, EMBEDDED_ASSISTANT)?;

        let knowledge = Self::from_parts(profile, assistant);
        knowledge.log_summary();
        Ok(knowledge)
    }

    /// Sample-mode predicate, forwarded from the profile.
    pub fn has_real_data(&self) -> bool {
        self.profile.has_real_data()
    }

    fn log_summary(&self) {
        for warning in &self.warnings {
            warn!("content tree: {warning}");
        }

        let census = placeholder_census(&self.profile);
        if self.profile.has_real_data() {
            info!(
                "Loaded profile for {} ({} of {} text fields still placeholder)",
                self.profile.personal.name, census.placeholder_fields, census.text_fields
            );
        } else {
            info!(
                "Profile still holds template data, serving sample responses ({} of {} text fields are placeholders)",
                census.placeholder_fields, census.text_fields
            );
        }
        info!(
            "Content tree: {} levels, {} nodes",
            self.tree.levels.len(),
            self.tree
                .levels
                .iter()
                .map(|l| l.nodes.len())
                .sum::<usize>()
        );
    }
}

fn read_data_file<T>(data_dir: &Path, file_name: &str, embedded: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let path = data_dir.join(file_name);
    match std::fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not found, using the embedded copy", path.display());
            serde_json::from_str(embedded)
                .with_context(|| format!("Embedded copy of {file_name} is invalid"))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::content_tree::{ContentLevel, ContentNode};

    #[test]
    fn test_embedded_defaults_cover_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let knowledge = Knowledge::load(dir.path()).unwrap();
        assert!(knowledge.tree.level(OVERVIEW_LEVEL).is_some());
        assert!(!knowledge.profile.personal.name.is_empty());
    }

    #[test]
    fn test_embedded_template_is_sample_mode() {
        let dir = tempfile::tempdir().unwrap();
        let knowledge = Knowledge::load(dir.path()).unwrap();
        assert!(!knowledge.has_real_data());
    }

    #[test]
    fn test_files_on_disk_win_over_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PORTFOLIO_FILE),
            r#"{"personal": {"name": "Ada Lovelace"}}"#,
        )
        .unwrap();
        let knowledge = Knowledge::load(dir.path()).unwrap();
        assert_eq!(knowledge.profile.personal.name, "Ada Lovelace");
        assert!(knowledge.has_real_data());
    }

    #[test]
    fn test_malformed_data_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PORTFOLIO_FILE), "{ not json").unwrap();
        assert!(Knowledge::load(dir.path()).is_err());
    }

    #[test]
    fn test_from_parts_collects_tree_warnings() {
        let tree = ContentTree {
            levels: vec![ContentLevel {
                name: "overview".to_string(),
                nodes: vec![ContentNode {
                    id: "work".to_string(),
                    title: "My Work".to_string(),
                    description: "Projects".to_string(),
                    button_text: "Show work".to_string(),
                    next_level: Some("never_authored".to_string()),
                }],
            }],
        };
        let knowledge = Knowledge::from_parts(
            Profile::default(),
            AssistantData {
                content: tree,
                contact: ContactInfo::default(),
            },
        );
        assert_eq!(knowledge.warnings.len(), 1);
    }

    #[test]
    fn test_embedded_tree_reports_unauthored_deep_dives() {
        // The template tree intentionally links to deep-dive levels that are
        // left for the owner to author.
        let dir = tempfile::tempdir().unwrap();
        let knowledge = Knowledge::load(dir.path()).unwrap();
        assert!(knowledge
            .warnings
            .iter()
            .any(|w| matches!(w, ContentWarning::BrokenLink { .. })));
    }
}
