//! Conversation wire types shared by the HTTP API, the in-process session,
//! and the terminal client. Field names follow the browser widget's JSON
//! (`type`, `isButtonAction`, `buttonText`) so payloads interoperate with it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. `content` is either a bare string (user text, error
/// messages) or a structured payload with display flags and buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub role: Role,
    pub content: MessageBody,
    #[serde(rename = "isButtonAction", default)]
    pub is_button_action: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    Rich(MessageContent),
}

/// Structured assistant payload. The boolean flags direct the client to show
/// the matching panel (project carousel, contact card, resume download, work
/// summary) alongside the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageContent {
    pub message: String,
    #[serde(default)]
    pub buttons: Vec<ChatButton>,
    #[serde(default)]
    pub portfolio: bool,
    #[serde(default)]
    pub contact: bool,
    #[serde(default)]
    pub resume: bool,
    #[serde(default)]
    pub work: bool,
    #[serde(default)]
    pub metadata: Option<DisclosureMeta>,
}

/// Where in the content tree a disclosure reply came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureMeta {
    pub level: usize,
    pub section: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatButton {
    pub id: String,
    pub text: String,
    pub action: String,
    pub variant: ButtonVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

impl MessageContent {
    /// Payload carrying only text, no flags or buttons.
    pub fn plain(message: impl Into<String>) -> Self {
        MessageContent {
            message: message.into(),
            ..MessageContent::default()
        }
    }
}

impl Message {
    pub fn from_user(text: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: MessageBody::Text(text.into()),
            is_button_action: false,
        }
    }

    /// User-side transcript entry recording a button press by its label.
    pub fn button_press(text: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: MessageBody::Text(text.into()),
            is_button_action: true,
        }
    }

    pub fn from_assistant(content: MessageContent) -> Self {
        Message {
            role: Role::Assistant,
            content: MessageBody::Rich(content),
            is_button_action: false,
        }
    }

    /// Assistant-side entry carrying only text, used for error notices.
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: MessageBody::Text(text.into()),
            is_button_action: false,
        }
    }
}

impl ChatButton {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        action: impl Into<String>,
        variant: ButtonVariant,
    ) -> Self {
        ChatButton {
            id: id.into(),
            text: text.into(),
            action: action.into(),
            variant,
        }
    }
}
