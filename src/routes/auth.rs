use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::AccountError;
use crate::models::User;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<User>, AccountError> {
    let user = state
        .accounts
        .create_user(&req.email, &req.password, &req.password_confirmation)
        .await?;

    Ok(Json(user))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<User>, AccountError> {
    let user = state
        .accounts
        .authenticate_by_email_password(&req.email, &req.password)
        .await
        .map_err(|e| match e {
            // Don't reveal whether the email exists
            AccountError::NotFound(_) => AccountError::InvalidCredentials,
            other => other,
        })?;

    Ok(Json(user))
}
