use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Extension, Json, Router,
};

use crate::{
    auth::CurrentUser,
    error::ApiResult,
    main_lib::AppState,
    models::{BudgetStatus, BudgetUpdate, User},
};

#[utoipa::path(get, path = "/api/v1/budget", responses((status = 200, body = BudgetStatus)))]
pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<BudgetStatus>> {
    let status = state.budget_service.evaluate(&user)?;
    Ok(Json(BudgetStatus::from(status)))
}

#[utoipa::path(put, path = "/api/v1/budget", request_body = BudgetUpdate,
    responses((status = 200, body = User), (status = 400)))]
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<BudgetUpdate>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(payload) = payload?;
    let updated = state
        .budget_service
        .set_daily_limit(user.id, payload.daily_limit)
        .await?;
    Ok(Json(User::from(updated)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budget", get(get_budget).put(update_budget))
}
