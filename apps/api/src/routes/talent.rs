use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dashboard::{dashboard_for, Dashboard};
use crate::errors::AppError;
use crate::models::job::{JobPosting, JobSort};
use crate::query::{filter_sort_search, list_query_from_params, ListResponse};
use crate::session::Role;
use crate::state::AppState;

const JOB_FACETS: &[&str] = &["category", "location"];

/// GET /api/v1/talent/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, AppError> {
    let session = state.session.require_role(Role::Talent).await?;
    let unread = state.chat.unread_total(&session.display_name).await;
    Ok(Json(dashboard_for(Role::Talent, &state.catalog, unread)))
}

/// GET /api/v1/talent/jobs?q=&category=&location=&sort=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<JobPosting>>, AppError> {
    state.session.require_role(Role::Talent).await?;
    let query = list_query_from_params::<JobSort>(&params, JOB_FACETS)?;

    let mut jobs = state.catalog.jobs.clone();
    state.jitter.apply_all(&mut jobs);
    Ok(Json(filter_sort_search(&jobs, &query).into()))
}
