use std::sync::Arc;

use axum::http::StatusCode;
use crates::domain::repositories::users::UserRepository;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::{issue_token, verify_password};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl LoginError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub struct LoginUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    jwt_secret: String,
    ttl_hours: i64,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, jwt_secret: String, ttl_hours: i64) -> Self {
        Self {
            user_repo,
            jwt_secret,
            ttl_hours,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let Some(user) = self.user_repo.find_by_username(&request.username).await? else {
            warn!(username = %request.username, "login: unknown user");
            return Err(LoginError::InvalidCredentials);
        };

        if !verify_password(&request.password, &user.password) {
            warn!(user_id = user.id, "login: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let token = issue_token(&self.jwt_secret, user.id, &user.username, self.ttl_hours)?;
        info!(user_id = user.id, "login: token issued");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
        })
    }
}
