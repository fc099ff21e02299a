//! Authentication middleware
//!
//! The gate in front of every protected operation: authenticate first, then
//! optionally check the role against an allowed set.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use shared::AppError;

/// Roles allowed to manage departments and employees
pub const ADMIN_ONLY: &[&str] = &["ADMIN"];

/// Routes reachable without a token
fn is_public_api_route(path: &str) -> bool {
    path == "/api/auth/login" || path == "/api/health"
}

/// Authentication middleware
///
/// Extracts and validates the `Authorization: Bearer <token>` header, then
/// injects [`CurrentUser`] into the request extensions. Skips OPTIONS
/// (CORS preflight), non-API paths and the public routes.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through (and 404 as usual)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
            return Err(AppError::unauthorized());
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "Authentication failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Role-check middleware factory
///
/// Reads the authenticated [`CurrentUser`] from the request extensions and
/// rejects the request when no claims are present or the claimed role is
/// not in `allowed`. Both failures surface as Unauthorized.
pub fn require_role(
    allowed: &'static [&'static str],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or_else(AppError::unauthorized)?;

            if !allowed.contains(&user.role.as_str()) {
                tracing::warn!(
                    target: "security",
                    user_id = %user.id,
                    role = %user.role,
                    "Role not allowed for this operation"
                );
                return Err(AppError::insufficient_role());
            }

            Ok(next.run(req).await)
        })
    }
}
