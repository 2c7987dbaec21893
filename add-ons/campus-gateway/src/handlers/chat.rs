//! Chat handler: FAQ layer first, then the dataset responder. Always 200.

use axum::extract::{Json, State};
use campus_core::CHAT_PROMPT;
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    pub(crate) message: String,
    /// Opaque passthrough; echoed verbatim.
    #[serde(rename = "studentId", default)]
    pub(crate) student_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) reply: String,
    #[serde(rename = "studentId")]
    pub(crate) student_id: Option<String>,
}

/// POST /chat (also mounted at /api/chat)
pub(crate) async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = req.message.trim();
    tracing::info!(
        target: "campus::chat",
        bytes = message.len(),
        student_id = req.student_id.as_deref().unwrap_or("-"),
        "Chat request received"
    );

    let reply = if message.is_empty() {
        CHAT_PROMPT.to_string()
    } else {
        state.assistant.reply(message)
    };

    Json(ChatResponse {
        reply,
        student_id: req.student_id,
    })
}
