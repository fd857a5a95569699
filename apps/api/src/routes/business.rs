use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dashboard::{dashboard_for, Dashboard};
use crate::errors::AppError;
use crate::models::favorite::{Favorite, FavoriteSort};
use crate::models::project::{Project, ProjectSort};
use crate::models::talent::{TalentProfile, TalentSort};
use crate::query::{filter_sort_search, list_query_from_params, ListResponse};
use crate::session::Role;
use crate::simulation::{PaymentConfirmation, PaymentMethodUpdate};
use crate::state::AppState;

const TALENT_FACETS: &[&str] = &["category", "location", "availability"];
const PROJECT_FACETS: &[&str] = &["category", "status"];
const FAVORITE_FACETS: &[&str] = &["category"];

/// GET /api/v1/business/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, AppError> {
    let session = state.session.require_role(Role::Business).await?;
    let unread = state.chat.unread_total(&session.display_name).await;
    Ok(Json(dashboard_for(Role::Business, &state.catalog, unread)))
}

/// GET /api/v1/business/talent?q=&category=&location=&availability=&sort=
/// Scores are jittered before filtering so sorting uses the displayed values.
pub async fn handle_search_talent(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<TalentProfile>>, AppError> {
    state.session.require_role(Role::Business).await?;
    let query = list_query_from_params::<TalentSort>(&params, TALENT_FACETS)?;

    let mut talent = state.catalog.talent.clone();
    state.jitter.apply_all(&mut talent);
    Ok(Json(filter_sort_search(&talent, &query).into()))
}

/// GET /api/v1/business/projects?q=&category=&status=&sort=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Project>>, AppError> {
    state.session.require_role(Role::Business).await?;
    let query = list_query_from_params::<ProjectSort>(&params, PROJECT_FACETS)?;
    Ok(Json(filter_sort_search(&state.catalog.projects, &query).into()))
}

/// GET /api/v1/business/favorites?q=&category=&sort=
pub async fn handle_list_favorites(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Favorite>>, AppError> {
    state.session.require_role(Role::Business).await?;
    let query = list_query_from_params::<FavoriteSort>(&params, FAVORITE_FACETS)?;

    let mut favorites = state.catalog.favorites.clone();
    state.jitter.apply_all(&mut favorites);
    Ok(Json(filter_sort_search(&favorites, &query).into()))
}

/// POST /api/v1/business/billing/payment
pub async fn handle_update_payment(
    State(state): State<AppState>,
    Json(req): Json<PaymentMethodUpdate>,
) -> Result<Json<PaymentConfirmation>, AppError> {
    state.session.require_role(Role::Business).await?;
    req.validate()?;
    Ok(Json(state.simulator.update_payment_method(req).await))
}
