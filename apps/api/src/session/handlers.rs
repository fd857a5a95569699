use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::session::models::Session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub session: Option<Session>,
}

/// POST /api/v1/session/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Session>, AppError> {
    let session = state.session.login(&req.email, &req.password).await?;
    Ok(Json(session))
}

/// POST /api/v1/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> StatusCode {
    state.session.logout().await;
    StatusCode::NO_CONTENT
}

/// GET /api/v1/session
pub async fn handle_current(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.current().await;
    Json(SessionResponse {
        authenticated: session.is_some(),
        session,
    })
}
