//! Authentication Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use shared::{AppError, AppResult, LoginRequest, LoginResponse, UserInfo};

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.auth_service().login(&req.email, &req.password).await?;
    Ok(Json(response))
}

/// Get current user info
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let repo = UserRepository::new(state.db.clone());
    let stored = repo
        .find_by_id(&user.id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(AppError::unauthorized)?;
    Ok(Json(stored.to_info()))
}
