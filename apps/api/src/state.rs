use std::sync::Arc;

use crate::config::Config;
use crate::knowledge::Knowledge;

/// Shared application state injected into all route handlers via Axum extractors.
/// `Knowledge` is immutable after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub knowledge: Arc<Knowledge>,
    pub config: Config,
}
