use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use crate::{
    auth::CurrentUser,
    error::ApiResult,
    main_lib::AppState,
    models::{Expense, ExpenseReceipt, NewExpense, RecentExpensesQuery},
};

#[utoipa::path(get, path = "/api/v1/expenses",
    params(("limit" = Option<i64>, Query, description = "Number of expenses, 1 to 100")),
    responses((status = 200, body = [Expense])))]
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    query: Result<Query<RecentExpensesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Expense>>> {
    let Query(query) = query?;
    let expenses = state.expense_service.list_recent(user.id, query.limit)?;
    Ok(Json(expenses.into_iter().map(Expense::from).collect()))
}

#[utoipa::path(post, path = "/api/v1/expenses", request_body = NewExpense,
    responses((status = 201, body = ExpenseReceipt), (status = 400)))]
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ExpenseReceipt>)> {
    let Json(payload) = payload?;
    let receipt = state
        .expense_service
        .record_expense(user.id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ExpenseReceipt::from(receipt))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/expenses", get(list_expenses).post(create_expense))
}
