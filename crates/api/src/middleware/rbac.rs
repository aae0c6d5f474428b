//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose caller does
//! not meet the minimum requirement. The role check is authoritative: instead
//! of trusting the role claim baked into the token, these extractors look the
//! user up in the users table, so a demoted or deleted account is rejected
//! even while its token is still unexpired.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use civitrack_core::error::CoreError;
use civitrack_core::roles::ROLE_ADMIN;
use civitrack_db::repositories::user_repo::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role, verified against the users table.
/// Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let record = UserRepo::find_by_id(&state.pool, user.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
            })?;

        if record.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }

        Ok(RequireAdmin(AuthUser {
            user_id: record.id,
            role: record.role,
        }))
    }
}

/// Requires any authenticated user whose account still exists.
///
/// Stricter than [`AuthUser`] alone: the account is re-checked against the
/// users table so a deleted account cannot keep writing with a live token.
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let record = UserRepo::find_by_id(&state.pool, user.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
            })?;

        Ok(RequireAuth(AuthUser {
            user_id: record.id,
            role: record.role,
        }))
    }
}
