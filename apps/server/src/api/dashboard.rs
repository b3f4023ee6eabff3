use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState, models::Dashboard};

#[utoipa::path(get, path = "/api/v1/dashboard", responses((status = 200, body = Dashboard)))]
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Dashboard>> {
    let dashboard = state.budget_service.get_dashboard(user.id)?;
    Ok(Json(Dashboard::from(dashboard)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
