use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{LoginRequest, LoginResponse, SignupRequest, User},
};

#[utoipa::path(post, path = "/api/v1/auth/signup", request_body = SignupRequest,
    responses((status = 201, body = User), (status = 400), (status = 409)))]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(payload) = payload?;
    let user = state.user_service.signup(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(User::from(user))))
}

#[utoipa::path(post, path = "/api/v1/auth/login", request_body = LoginRequest,
    responses((status = 200, body = LoginResponse), (status = 401)))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let user = state
        .user_service
        .authenticate(&payload.email, &payload.password)
        .await?;
    let token = state
        .auth
        .issue_token(user.id)
        .map_err(|e| ApiError::Internal(format!("{e:?}")))?;
    tracing::info!("Account {} logged in", user.id);

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.expires_in().as_secs(),
        user: user.into(),
    }))
}

/// Tokens are stateless; the client discards its copy.
#[utoipa::path(post, path = "/api/v1/auth/logout", responses((status = 204)))]
pub async fn logout(Extension(CurrentUser(user)): Extension<CurrentUser>) -> StatusCode {
    tracing::info!("Account {} logged out", user.id);
    StatusCode::NO_CONTENT
}

#[utoipa::path(get, path = "/api/v1/auth/me", responses((status = 200, body = User), (status = 401)))]
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<User> {
    Json(User::from(user))
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}
