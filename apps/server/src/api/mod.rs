use std::sync::Arc;

use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    auth::require_jwt,
    config::Config,
    main_lib::AppState,
    models::{
        BudgetClassification, BudgetStatus, BudgetUpdate, Dashboard, Expense, ExpenseReceipt,
        LoginRequest, LoginResponse, NewExpense, SignupRequest, User,
    },
};

mod auth;
mod budget;
mod dashboard;
mod expenses;
mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        auth::signup,
        auth::login,
        auth::logout,
        auth::me,
        dashboard::get_dashboard,
        expenses::list_expenses,
        expenses::create_expense,
        budget::get_budget,
        budget::update_budget,
    ),
    components(schemas(
        User,
        SignupRequest,
        LoginRequest,
        LoginResponse,
        Expense,
        NewExpense,
        ExpenseReceipt,
        BudgetClassification,
        BudgetStatus,
        BudgetUpdate,
        Dashboard,
    )),
    tags((name = "dailycap"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let protected = Router::new()
        .merge(auth::protected_router())
        .merge(dashboard::router())
        .merge(expenses::router())
        .merge(budget::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .merge(health::router())
        .merge(auth::public_router())
        .merge(protected);

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
