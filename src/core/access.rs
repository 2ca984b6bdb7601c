use crate::domain::model::{AccessDecision, Identity};
use crate::domain::ports::{ConfigProvider, IdentityProvider};
use crate::utils::error::{AdminError, Result};
use crate::utils::validation::validate_email;

pub const LOGIN_PATH: &str = "/admin/login";

/// Gates entry to the admin area. The decision is computed fresh on every
/// request and returned as a value; callers apply the redirect themselves.
pub struct AccessGate<I: IdentityProvider, C: ConfigProvider> {
    provider: I,
    config: C,
}

impl<I: IdentityProvider, C: ConfigProvider> AccessGate<I, C> {
    pub fn new(provider: I, config: C) -> Self {
        Self { provider, config }
    }

    /// Decision table:
    /// session present        -> Allow(email)
    /// absent, configured + production -> Redirect(login)
    /// absent, otherwise      -> AllowDemo(demo email)
    ///
    /// A provider fault counts as "no session". Only the explicit
    /// authenticated-production-not-logged-in state blocks access.
    pub async fn resolve_access(&self) -> AccessDecision {
        let identity = match self.provider.current_user().await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!("identity lookup failed, treating as no session: {}", e);
                None
            }
        };

        if let Some(identity) = identity {
            return AccessDecision::Allow(identity.email);
        }

        if self.config.auth_configured() && self.config.production() {
            return AccessDecision::Redirect(LOGIN_PATH.to_string());
        }

        if self.config.production() {
            // Unconfigured provider in production means an open dashboard.
            // Allowed per the demo-mode contract, but worth a loud log line.
            tracing::warn!("granting demo access in production: no identity provider configured");
        }

        AccessDecision::AllowDemo(self.config.demo_email().to_string())
    }

    /// Delegated credential check. Every provider-side failure collapses to
    /// [`AdminError::InvalidCredentials`] so no detail about which half of
    /// the credential pair was wrong leaks to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        if validate_email("email", email).is_err() || password.is_empty() {
            return Err(AdminError::InvalidCredentials);
        }

        match self.provider.sign_in(email, password).await {
            Ok(identity) => {
                tracing::info!("admin login: {}", identity.email);
                Ok(identity)
            }
            Err(e) => {
                tracing::debug!("sign-in rejected by provider: {}", e);
                Err(AdminError::InvalidCredentials)
            }
        }
    }

    /// Invalidates the session and signals where to send the user next. A
    /// provider fault does not block logout from the caller's perspective.
    pub async fn logout(&self) -> AccessDecision {
        if let Err(e) = self.provider.sign_out().await {
            tracing::warn!("sign-out failed at provider: {}", e);
        }
        AccessDecision::Redirect(LOGIN_PATH.to_string())
    }
}
