// Chat core: keyword classification, template rendering, progressive
// disclosure, and the two surfaces that consume them (HTTP handlers and the
// in-process session). The classify-and-render path is shared, so both
// surfaces answer identically.

pub mod backend;
pub mod classifier;
pub mod disclosure;
pub mod handlers;
pub mod models;
pub mod responder;
pub mod session;
pub mod templates;

pub use backend::{BackendError, ClassifierBackend, HttpBackend, LocalBackend};
pub use models::{ButtonVariant, ChatButton, Message, MessageBody, MessageContent, Role};
pub use session::{main_menu_buttons, ChatSession};
