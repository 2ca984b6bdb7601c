use crate::domain::model::Identity;
use crate::domain::ports::IdentityProvider;
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;

/// Identity provider backed by a GoTrue-style hosted auth API
/// (password-grant token endpoint, user lookup, logout).
///
/// Holds the access token from the most recent successful sign-in, so one
/// client instance carries one session. Transport faults map to
/// [`AdminError::ProviderUnavailable`]; credential rejections map to
/// [`AdminError::InvalidCredentials`].
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: Mutex<Option<String>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

#[derive(Deserialize)]
struct AuthUser {
    email: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: Mutex::new(None),
        }
    }

    fn unavailable(e: reqwest::Error) -> AdminError {
        AdminError::ProviderUnavailable {
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let url = format!("{}/token?grant_type=password", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(Self::unavailable)?;

        match response.status() {
            status if status.is_success() => {
                let token: TokenResponse = response.json().await.map_err(Self::unavailable)?;
                *self.access_token.lock().await = Some(token.access_token);
                Ok(Identity {
                    email: token.user.email,
                })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(AdminError::InvalidCredentials)
            }
            status => Err(AdminError::ProviderUnavailable {
                message: format!("auth provider returned {}", status),
            }),
        }
    }

    async fn sign_out(&self) -> Result<()> {
        let token = self.access_token.lock().await.take();
        let Some(token) = token else {
            return Ok(());
        };

        let url = format!("{}/logout", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(Self::unavailable)?;

        // The local token is already dropped; a non-2xx here only means the
        // provider-side revocation did not happen.
        if !response.status().is_success() {
            tracing::debug!("logout returned {}", response.status());
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<Identity>> {
        let token = self.access_token.lock().await.clone();
        let Some(token) = token else {
            return Ok(None);
        };

        let url = format!("{}/user", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(Self::unavailable)?;

        match response.status() {
            status if status.is_success() => {
                let user: AuthUser = response.json().await.map_err(Self::unavailable)?;
                Ok(Some(Identity { email: user.email }))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                // Token expired or revoked server-side.
                *self.access_token.lock().await = None;
                Ok(None)
            }
            status => Err(AdminError::ProviderUnavailable {
                message: format!("auth provider returned {}", status),
            }),
        }
    }
}
