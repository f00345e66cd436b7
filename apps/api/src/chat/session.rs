//! The session-side dispatcher: owns the transcript and routes typed text
//! and button presses.
//!
//! Typed text runs through a short ladder of canned UI-directive replies
//! before anything reaches the classifier backend. Button presses consult
//! the content tree first, then the reserved control actions, and only
//! unknown ids travel to the backend. Both entry points take `&mut self`,
//! so a session holds at most one request in flight.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::knowledge::Knowledge;

use super::backend::{ClassifierBackend, LocalBackend};
use super::classifier::Topic;
use super::disclosure;
use super::models::{ButtonVariant, ChatButton, Message, MessageContent};
use super::responder;

// ────────────────────────────────────────────────────────────────────────────
// Canned replies and the main menu
// ────────────────────────────────────────────────────────────────────────────

const GREETING: &str =
    "Hi! I'm here to help you explore my work and experience. Click 'My Work' to see my projects!";

const RESUME_OFFER_REPLY: &str =
    "I'd be happy to share my resume with you! Here's a download link:";
const CONTACT_REPLY: &str = "Here's how you can get in touch with me:";
const CASE_STUDIES_REPLY: &str =
    "Here are my case studies. Click on any thumbnail to explore the full project:";
const WORK_SUMMARY_REPLY: &str = "Here's information about my work experience:";
const RESUME_DOWNLOAD_REPLY: &str = "Here's my resume download:";

const CONNECT_ERROR_REPLY: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// The six persistent menu buttons shown under the input box.
pub fn main_menu_buttons() -> Vec<ChatButton> {
    vec![
        ChatButton::new("btn_work", "My Work", "work", ButtonVariant::Primary),
        ChatButton::new("btn_experience", "Experience", "experience", ButtonVariant::Primary),
        ChatButton::new("btn_skills", "Skills", "skills", ButtonVariant::Primary),
        ChatButton::new("btn_about", "About Me", "about", ButtonVariant::Primary),
        ChatButton::new("btn_contact", "Contact Me", "CONTACT_ME", ButtonVariant::Primary),
        ChatButton::new("btn_resume", "my-resume.pdf", "DOWNLOAD_RESUME", ButtonVariant::Primary),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Button actions
// ────────────────────────────────────────────────────────────────────────────

/// A button's action string, parsed into the closed set the session handles.
/// The control actions are reserved uppercase ids; everything else is a
/// disclosure candidate, lowercased for tree lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    Disclose(String),
    ViewPortfolio,
    ContactMe,
    DownloadResume,
}

impl ButtonAction {
    pub fn parse(action: &str) -> Self {
        match action {
            "VIEW_PORTFOLIO" => ButtonAction::ViewPortfolio,
            "CONTACT_ME" => ButtonAction::ContactMe,
            "DOWNLOAD_RESUME" => ButtonAction::DownloadResume,
            _ => ButtonAction::Disclose(action.to_lowercase()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ChatSession
// ────────────────────────────────────────────────────────────────────────────

/// One conversation. Seeds the greeting with the main menu, then appends
/// messages in strict submission order; state lives only as long as the
/// session value.
pub struct ChatSession {
    knowledge: Arc<Knowledge>,
    backend: Box<dyn ClassifierBackend>,
    messages: Vec<Message>,
}

impl ChatSession {
    /// Session answering in process from the given knowledge base.
    pub fn new(knowledge: Arc<Knowledge>) -> Self {
        let backend = Box::new(LocalBackend::new(Arc::clone(&knowledge)));
        Self::with_backend(knowledge, backend)
    }

    /// Session with an explicit backend, e.g. `HttpBackend` for a remote
    /// server. The knowledge base still serves the tree lookups and the
    /// skills template, which never leave the process.
    pub fn with_backend(knowledge: Arc<Knowledge>, backend: Box<dyn ClassifierBackend>) -> Self {
        let greeting = MessageContent {
            message: GREETING.to_string(),
            buttons: main_menu_buttons(),
            ..MessageContent::default()
        };
        ChatSession {
            knowledge,
            backend,
            messages: vec![Message::from_assistant(greeting)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Handles one typed message. Empty or whitespace-only input is ignored
    /// without touching the transcript. The keyword ladder is checked in
    /// order and the first hit wins; only misses reach the backend.
    pub async fn submit_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.messages.push(Message::from_user(text));

        let lowered = text.to_lowercase();
        if lowered.contains("resume") {
            self.push_assistant(MessageContent {
                message: RESUME_OFFER_REPLY.to_string(),
                resume: true,
                ..MessageContent::default()
            });
        } else if lowered.contains("contact") {
            self.push_assistant(MessageContent {
                message: CONTACT_REPLY.to_string(),
                contact: true,
                ..MessageContent::default()
            });
        } else if lowered.contains("case study") || lowered.contains("case studies") {
            self.push_assistant(MessageContent {
                message: CASE_STUDIES_REPLY.to_string(),
                portfolio: true,
                ..MessageContent::default()
            });
        } else if lowered.contains("work") {
            self.push_assistant(MessageContent {
                message: WORK_SUMMARY_REPLY.to_string(),
                work: true,
                portfolio: true,
                ..MessageContent::default()
            });
        } else if lowered.contains("skills") {
            let rendered = responder::render_topic(Topic::Skills, &self.knowledge);
            self.push_assistant(MessageContent::plain(rendered));
        } else {
            self.classify_and_append(text).await;
        }
    }

    /// Handles one button press. The press itself is echoed into the
    /// transcript under the button's label before the action dispatches.
    pub async fn press_button(&mut self, button: ChatButton) {
        self.messages.push(Message::button_press(button.text.as_str()));

        match ButtonAction::parse(&button.action) {
            ButtonAction::Disclose(ref id) if self.knowledge.tree.contains(id) => {
                let content = disclosure::resolve(id, &self.knowledge.tree);
                self.push_assistant(content);
            }
            ButtonAction::ViewPortfolio => {
                self.push_assistant(MessageContent {
                    message: CASE_STUDIES_REPLY.to_string(),
                    portfolio: true,
                    ..MessageContent::default()
                });
            }
            ButtonAction::ContactMe => {
                self.push_assistant(MessageContent {
                    message: CONTACT_REPLY.to_string(),
                    contact: true,
                    ..MessageContent::default()
                });
            }
            ButtonAction::DownloadResume => {
                self.push_assistant(MessageContent {
                    message: RESUME_DOWNLOAD_REPLY.to_string(),
                    resume: true,
                    ..MessageContent::default()
                });
            }
            ButtonAction::Disclose(_) => {
                // Unknown id. Forward it wrapped so the server can log it;
                // the wrapper keeps the action's original casing.
                let wrapped = format!("[BUTTON_ACTION: {}]", button.action);
                debug!("unknown button action, forwarding: {}", button.action);
                self.classify_and_append(&wrapped).await;
            }
        }
    }

    async fn classify_and_append(&mut self, message: &str) {
        match self.backend.classify(message, &self.messages).await {
            Ok(content) => self.push_assistant(content),
            Err(error) => {
                warn!("classifier backend failed: {error}");
                self.messages.push(Message::assistant_text(CONNECT_ERROR_REPLY));
            }
        }
    }

    fn push_assistant(&mut self, content: MessageContent) {
        self.messages.push(Message::from_assistant(content));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
