use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::dashboard::{dashboard_for, Dashboard};
use crate::errors::AppError;
use crate::models::user::{UserRecord, UserSort};
use crate::query::{filter_sort_search, list_query_from_params, ListResponse};
use crate::session::Role;
use crate::simulation::{BackupSummary, QueueHealth};
use crate::state::AppState;

const USER_FACETS: &[&str] = &["role", "status"];

/// GET /api/v1/admin/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, AppError> {
    state.session.require_role(Role::Admin).await?;
    Ok(Json(dashboard_for(Role::Admin, &state.catalog, 0)))
}

/// GET /api/v1/admin/users?q=&role=&status=&sort=
pub async fn handle_list_users(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<UserRecord>>, AppError> {
    state.session.require_role(Role::Admin).await?;
    let query = list_query_from_params::<UserSort>(&params, USER_FACETS)?;
    Ok(Json(filter_sort_search(&state.catalog.users, &query).into()))
}

/// GET /api/v1/admin/ai/queue
pub async fn handle_ai_queue(State(state): State<AppState>) -> Result<Json<QueueHealth>, AppError> {
    state.session.require_role(Role::Admin).await?;
    Ok(Json(state.simulator.refresh_ai_jobs().await))
}

/// POST /api/v1/admin/backups
pub async fn handle_run_backup(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<BackupSummary>), AppError> {
    state.session.require_role(Role::Admin).await?;
    Ok((StatusCode::CREATED, Json(state.simulator.run_backup().await)))
}
