use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::auth::dto::{
    SigninRequest, SigninResponse, SignupRequest, SignupResponse, UserResponse,
};
use crate::auth::jwt::AuthUser;
use crate::auth::repo_types::User;
use crate::auth::services;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/auth/callback", get(auth_callback))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let user = services::register(&state, payload).await?;
    info!(user_id = %user.id, role = %user.role, "user signed up");
    Ok(Json(SignupResponse {
        message: "Confirmation email sent!".into(),
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> ApiResult<Json<SigninResponse>> {
    let (user, token) = services::signin(&state, payload).await?;
    info!(user_id = %user.id, role = %user.role, "user signed in");
    Ok(Json(SigninResponse {
        message: "User signed in successfully".into(),
        role: user.role,
        token,
    }))
}

/// Post-confirmation landing. The redirect target is chosen solely by the
/// stored role.
#[instrument(skip(state))]
pub async fn auth_callback(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Redirect> {
    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Redirect::to(user.role.dashboard_path()))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(UserResponse { user: user.into() }))
}
