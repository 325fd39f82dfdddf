//! Handlers for the `/auth` resource (Google sign-in, session probe, logout).

use axum::extract::State;
use serde::{Deserialize, Serialize};

use gitshelf_core::error::CoreError;
use gitshelf_db::models::user::{CreateUser, User};
use gitshelf_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/google`.
///
/// `token` is optional at the serde level so a missing field maps to a 400
/// with a useful message instead of a generic deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct GoogleAuthRequest {
    pub token: Option<String>,
}

/// Successful sign-in response: the local user plus the token the client
/// should keep presenting as its bearer credential.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Envelope for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/google
///
/// Verify an identity-provider token and look up or create the local user
/// for its subject. Existing users get their display profile refreshed.
pub async fn google_sign_in(
    State(state): State<AppState>,
    Json(input): Json<GoogleAuthRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token = input
        .token
        .ok_or_else(|| AppError::BadRequest("Token required".into()))?;

    let principal = state.verifier.verify(&token).await?;

    let user = match UserRepo::find_by_google_id(&state.pool, &principal.subject).await? {
        Some(existing) => UserRepo::update_profile(
            &state.pool,
            existing.id,
            &principal.name,
            principal.picture.as_deref(),
        )
        .await?
        .unwrap_or(existing),
        None => {
            let created = UserRepo::create(
                &state.pool,
                &CreateUser {
                    email: principal.email.clone(),
                    name: principal.name.clone(),
                    avatar: principal.picture.clone(),
                    google_id: principal.subject.clone(),
                },
            )
            .await?;
            tracing::info!(user_id = created.id, "Created user from Google sign-in");
            created
        }
    };

    Ok(Json(AuthResponse { user, token }))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<MeResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User not found".into())))?;
    Ok(Json(MeResponse { user }))
}

/// POST /api/v1/auth/logout
///
/// Tokens are verified statelessly on every request, so there is nothing to
/// invalidate server-side; the client drops its cached token.
pub async fn logout(_auth: AuthUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Logged out successfully" }))
}
