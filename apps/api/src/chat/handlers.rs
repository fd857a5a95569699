use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::conversation::{Conversation, ConversationSort, Message};
use crate::query::{list_query_from_params, ListResponse};
use crate::state::AppState;

const CONVERSATION_FACETS: &[&str] = &["status"];

#[derive(Deserialize)]
pub struct OpenConversationRequest {
    pub participants: Vec<String>,
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// GET /api/v1/conversations
/// Only threads the signed-in user takes part in; others answer 404 everywhere.
pub async fn handle_list_conversations(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Conversation>>, AppError> {
    let session = state.session.require_session().await?;
    let query = list_query_from_params::<ConversationSort>(&params, CONVERSATION_FACETS)?;
    Ok(Json(state.chat.list(&session.display_name, &query).await.into()))
}

/// POST /api/v1/conversations
/// The signed-in user is always a participant.
pub async fn handle_open_conversation(
    State(state): State<AppState>,
    Json(req): Json<OpenConversationRequest>,
) -> Result<(StatusCode, Json<Conversation>), AppError> {
    let session = state.session.require_session().await?;

    if req.participants.iter().all(|p| p.trim().is_empty()) {
        return Err(AppError::Validation(
            "Name at least one other participant".to_string(),
        ));
    }

    let mut participants = vec![session.display_name];
    participants.extend(req.participants);
    let conversation = state.chat.open(participants).await?;
    Ok((StatusCode::CREATED, Json(conversation)))
}

/// GET /api/v1/conversations/:id/messages
pub async fn handle_get_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, AppError> {
    let session = state.session.require_session().await?;
    Ok(Json(state.chat.messages(&session.display_name, id).await?))
}

/// POST /api/v1/conversations/:id/messages
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let session = state.session.require_session().await?;
    let message = state.chat.send(&session.display_name, id, &req.text).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /api/v1/conversations/:id/read
pub async fn handle_mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Conversation>, AppError> {
    let session = state.session.require_session().await?;
    Ok(Json(state.chat.mark_read(&session.display_name, id).await?))
}
