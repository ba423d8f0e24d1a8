//! Chat API routes.
//!
//! - `POST /api/chat`: answer one message with `{success, response, timestamp}`
//! - `GET  /api/quick-actions`: ordered list of suggested prompts

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use campus_agent::Responder;
use campus_core::clock::{locale_timestamp, Clock};
use campus_core::domain::quick_action::QuickAction;
use campus_core::errors::{ApplicationError, InterfaceError};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ChatState {
    responder: Arc<Responder>,
    clock: Arc<dyn Clock>,
}

impl ChatState {
    pub fn new(responder: Responder, clock: Arc<dyn Clock>) -> Self {
        Self { responder: Arc::new(responder), clock }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ChatError {
    pub error: String,
}

pub fn router(state: ChatState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/quick-actions", get(quick_actions))
        .with_state(state)
}

async fn chat(
    State(state): State<ChatState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatError>)> {
    let correlation_id = Uuid::new_v4().simple().to_string();

    let message =
        extract_message(payload).map_err(|error| reject(error.into_interface(&correlation_id)))?;
    let message_len = message.chars().count();

    // The responder is synchronous; a panic inside it surfaces as a JoinError.
    let responder = Arc::clone(&state.responder);
    let reply = tokio::task::spawn_blocking(move || responder.reply(&message))
        .await
        .map_err(|join_error| {
            reject(
                ApplicationError::Responder(join_error.to_string()).into_interface(&correlation_id),
            )
        })?;

    info!(
        event_name = "chat.message.answered",
        correlation_id = %correlation_id,
        topic = reply.topic.as_str(),
        message_len,
        "chat message answered"
    );

    Ok(Json(ChatResponse {
        success: true,
        response: reply.text,
        timestamp: locale_timestamp(&state.clock.now()),
    }))
}

async fn quick_actions(State(state): State<ChatState>) -> Json<&'static [QuickAction]> {
    Json(state.responder.dataset().quick_actions)
}

fn extract_message(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<String, ApplicationError> {
    match payload {
        Ok(Json(body)) => message_from_body(body),
        // A body sent without a JSON content type is never parsed, so it has no message.
        Err(JsonRejection::MissingJsonContentType(_)) => Err(ApplicationError::MissingMessage),
        Err(rejection) => Err(ApplicationError::MalformedRequest(rejection.body_text())),
    }
}

/// `null`, `false`, `0` and `""` count as no message at all. Any other non-string
/// value cannot be answered and is reported as a server-side failure.
fn message_from_body(body: Value) -> Result<String, ApplicationError> {
    let message = match body {
        Value::Object(mut fields) => fields.remove("message"),
        Value::Array(_) => None,
        other => {
            return Err(ApplicationError::MalformedRequest(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )))
        }
    };

    match message {
        None | Some(Value::Null | Value::Bool(false)) => Err(ApplicationError::MissingMessage),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => {
            Err(ApplicationError::MissingMessage)
        }
        Some(Value::String(text)) if text.is_empty() => Err(ApplicationError::MissingMessage),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(ApplicationError::Responder(format!(
            "message must be a string, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn reject(error: InterfaceError) -> (StatusCode, Json<ChatError>) {
    let status = if error.is_client_error() {
        warn!(
            event_name = "chat.message.rejected",
            correlation_id = %error.correlation_id(),
            error = %error,
            "chat request rejected"
        );
        StatusCode::BAD_REQUEST
    } else {
        error!(
            event_name = "chat.message.failed",
            correlation_id = %error.correlation_id(),
            error = %error,
            "chat reply could not be produced"
        );
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ChatError { error: error.user_message().to_string() }))
}
