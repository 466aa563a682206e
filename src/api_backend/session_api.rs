use serde::{Deserialize, Serialize};

use crate::data_types::Principal;
use crate::errors::ApiError;
use crate::registration_draft::RegistrationSubmission;

use super::ApiClient;

#[derive(Serialize, Debug)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub user: Principal,
    pub token: String,
    #[serde(default)]
    pub favorites: Vec<u64>,
}

impl ApiClient {
    /// Logs in, installs the bearer token for all following requests,
    /// and returns the principal plus their favorites.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .post_json("session/login", &LoginRequest { email, password })
            .await?;
        self.set_token(response.token.clone()).await;
        log::info!("logged in as {} ({:?})", response.user.name, response.user.role);
        Ok(response)
    }

    /// Best-effort server-side logout; the local token is dropped either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_unit("session/logout", &serde_json::json!({})).await;
        self.clear_token().await;
        result
    }

    pub async fn register(&self, submission: &RegistrationSubmission) -> Result<Principal, ApiError> {
        self.post_json("session/register", submission).await
    }
}
