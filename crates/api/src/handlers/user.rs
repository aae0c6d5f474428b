//! Handlers for the `/api/users` resource: registration, login, listing,
//! and the admin account-removal flow.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use civitrack_core::error::CoreError;
use civitrack_core::roles::ROLE_USER;
use civitrack_core::types::DbId;
use civitrack_db::models::user::{CreateUser, RegisterUser, UserResponse};
use civitrack_db::repositories::{CommentRepo, ReportRepo, UserRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response. Unwrapped (no `{data}` envelope); existing
/// clients read `user` and `token` at the top level.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Outcome of the admin account-removal flow, with per-step counts.
#[derive(Debug, Serialize)]
pub struct UserDeleteOutcome {
    pub message: String,
    pub reports_deleted: u64,
    pub comments_deleted: u64,
}

// ---------------------------------------------------------------------------
// POST /api/users
// ---------------------------------------------------------------------------

/// Register a new account. The role is always `user`; promotion to admin
/// happens out of band.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    input.validate().map_err(AppError::from_validation)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            password_hash,
            role: ROLE_USER.to_string(),
        },
    )
    .await?;

    tracing::info!(id = user.id, username = %user.username, "User registered");
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

// ---------------------------------------------------------------------------
// POST /api/users/login
// ---------------------------------------------------------------------------

/// Authenticate with email + password.
///
/// Legacy contract: an unknown email is a 404 and a wrong password is a 400,
/// distinguishable on purpose.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::NotFound("No account with that email".into()))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(id = user.id, "User logged in");
    Ok(Json(LoginResponse {
        user: UserResponse::from(user),
        token,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/users
// ---------------------------------------------------------------------------

/// List all accounts. Admin only. Password hashes never leave the database
/// layer; rows are projected through [`UserResponse`].
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(DataResponse { data: users }))
}

// ---------------------------------------------------------------------------
// DELETE /api/users/{id}
// ---------------------------------------------------------------------------

/// Remove an account and its authored content. Admin only.
///
/// Runs as an explicit three-step sequence with no enclosing transaction:
/// reports first, then comments, then the account row. Each step logs its
/// outcome so a failure mid-sequence is visible in the logs, and a retry of
/// the same call completes the remaining steps.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserDeleteOutcome>> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let reports_deleted = ReportRepo::delete_all_for_user(&state.pool, id).await?;
    tracing::info!(user_id = id, deleted_by = admin.user_id, reports_deleted, "User reports removed");

    let comments_deleted = CommentRepo::delete_all_for_user(&state.pool, id).await?;
    tracing::info!(user_id = id, deleted_by = admin.user_id, comments_deleted, "User comments removed");

    UserRepo::delete(&state.pool, id).await?;
    tracing::info!(user_id = id, deleted_by = admin.user_id, "User account removed");

    Ok(Json(UserDeleteOutcome {
        message: "User deleted".to_string(),
        reports_deleted,
        comments_deleted,
    }))
}
