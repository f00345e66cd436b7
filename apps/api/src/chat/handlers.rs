//! HTTP surface of the classifier. Thin wrappers over `responder`; all the
//! actual decision logic stays in the shared modules.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

use super::responder;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Transcript the widget sends along. Accepted for wire compatibility;
    /// classification is single-turn and never reads it.
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub message: ChatReplyBody,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ChatReplyBody {
    pub message: String,
    pub portfolio: bool,
}

#[derive(Serialize)]
pub struct ChatProbeResponse {
    pub status: String,
    pub timestamp: String,
    #[serde(rename = "hasPortfolioData")]
    pub has_portfolio_data: bool,
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if !req.messages.is_empty() {
        debug!(
            "ignoring {} transcript messages, classification is single-turn",
            req.messages.len()
        );
    }
    if req.instructions.is_some() {
        debug!("ignoring client-supplied instructions");
    }

    let reply = responder::respond(&req.message, &state.knowledge);
    Ok(Json(ChatResponse {
        message: ChatReplyBody {
            message: reply.message,
            portfolio: reply.portfolio,
        },
        timestamp: now_rfc3339(),
    }))
}

/// GET /api/chat
/// Liveness probe for the widget; reports whether real profile data is
/// loaded or the embedded template is still serving samples.
pub async fn handle_chat_probe(State(state): State<AppState>) -> Json<ChatProbeResponse> {
    Json(ChatProbeResponse {
        status: "Chat API is running".to_string(),
        timestamp: now_rfc3339(),
        has_portfolio_data: state.knowledge.has_real_data(),
    })
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_are_utc_with_millis() {
        let stamp = now_rfc3339();
        assert!(stamp.ends_with('Z'));
        // 2026-01-02T03:04:05.678Z
        assert_eq!(stamp.len(), 24);
        assert_eq!(&stamp[stamp.len() - 5..stamp.len() - 4], ".");
    }

    #[test]
    fn test_request_accepts_minimal_body() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.message, "hi");
        assert!(req.messages.is_empty());
        assert!(req.instructions.is_none());
    }

    #[test]
    fn test_probe_renames_portfolio_field() {
        let probe = ChatProbeResponse {
            status: "Chat API is running".to_string(),
            timestamp: now_rfc3339(),
            has_portfolio_data: false,
        };
        let json = serde_json::to_value(&probe).unwrap();
        assert_eq!(json["hasPortfolioData"], false);
    }
}
