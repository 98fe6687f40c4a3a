//! Tableside backend REST client.
//!
//! One shared [`ApiClient`] lives in the application state. Handlers bind it
//! to the signed-in staff member's token with [`ApiClient::authorized`] and
//! call the endpoint methods on the returned [`AuthorizedClient`].

use std::sync::Arc;

use reqwest::Response;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};
use url::Url;

use tableside_core::{
    OrganisationUpdate, OutletId, OutletInfo, PasswordChange, ProfileUpdate, TenantId,
    TenantInfo, UserProfile,
};

use super::error::{ApiError, extract_error_message};
use super::types::{DataEnvelope, OutletDetails, TenantDetails};
use crate::config::ApiConfig;
use crate::models::SessionContext;

/// Shared HTTP client for the backend.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL does not parse or the HTTP client fails
    /// to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ApiError::Endpoint(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Endpoint(format!(
                "{} cannot be used as a base URL",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("tableside-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            inner: Arc::new(ApiClientInner { client, base_url }),
        })
    }

    /// Backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Bind the client to a bearer token.
    #[must_use]
    pub fn authorized(&self, token: SecretString) -> AuthorizedClient<'_> {
        AuthorizedClient { api: self, token }
    }

    /// Bind the client to the token held in a session context.
    #[must_use]
    pub fn for_session(&self, session: &SessionContext) -> AuthorizedClient<'_> {
        self.authorized(session.access_token())
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Endpoint(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Backend client carrying a staff member's bearer token.
pub struct AuthorizedClient<'a> {
    api: &'a ApiClient,
    token: SecretString,
}

impl std::fmt::Debug for AuthorizedClient<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizedClient")
            .field("api", self.api)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl AuthorizedClient<'_> {
    // =========================================================================
    // Profile
    // =========================================================================

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` carrying the backend's message on a
    /// non-success response.
    #[instrument(skip_all)]
    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        let envelope: DataEnvelope<UserProfile> = self
            .get(&["users", "profile"], "Failed to fetch profile")
            .await?;
        Ok(envelope.data)
    }

    /// Update name, email or phone number.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` if the backend rejects the update.
    #[instrument(skip_all)]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let envelope: DataEnvelope<UserProfile> = self
            .patch(
                &["users", "profile", "update"],
                update,
                "Failed to update profile",
            )
            .await?;
        Ok(envelope.data)
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` if the current password is wrong or the
    /// new one fails server-side validation.
    #[instrument(skip_all)]
    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let url = self
            .api
            .endpoint(&["users", "profile", "change-password"])?;
        let response = self
            .api
            .inner
            .client
            .patch(url)
            .bearer_auth(self.token.expose_secret())
            .json(change)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        if response.status().is_success() {
            debug!("Password changed");
            return Ok(());
        }

        Err(Self::parse_error(response, "Failed to change password").await)
    }

    // =========================================================================
    // Organisations
    // =========================================================================

    /// Update a tenant's name, address or contacts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` if the backend rejects the update.
    #[instrument(skip_all, fields(tenant_id = %id))]
    pub async fn update_tenant_details(
        &self,
        id: &TenantId,
        update: &OrganisationUpdate,
    ) -> Result<TenantInfo, ApiError> {
        let envelope: DataEnvelope<TenantInfo> = self
            .patch(
                &["tenants", id.as_str(), "update"],
                update,
                "Failed to update tenant details",
            )
            .await?;
        Ok(envelope.data)
    }

    /// Update an outlet's name, address or contacts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` if the backend rejects the update.
    #[instrument(skip_all, fields(outlet_id = %id))]
    pub async fn update_outlet_details(
        &self,
        id: &OutletId,
        update: &OrganisationUpdate,
    ) -> Result<OutletInfo, ApiError> {
        let envelope: DataEnvelope<OutletInfo> = self
            .patch(
                &["outlets", id.as_str(), "update"],
                update,
                "Failed to update outlet details",
            )
            .await?;
        Ok(envelope.data)
    }

    /// Fetch a tenant with its contact details.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` on a non-success response.
    #[instrument(skip_all, fields(tenant_id = %id))]
    pub async fn fetch_tenant_details(&self, id: &TenantId) -> Result<TenantInfo, ApiError> {
        let envelope: DataEnvelope<TenantDetails> = self
            .get(
                &["tenants", id.as_str(), "details"],
                "Failed to fetch tenant details",
            )
            .await?;
        Ok(envelope.data.tenant)
    }

    /// Fetch an outlet with its contact details.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` on a non-success response, including when
    /// the backend does not serve this route.
    #[instrument(skip_all, fields(outlet_id = %id))]
    pub async fn fetch_outlet_details(&self, id: &OutletId) -> Result<OutletInfo, ApiError> {
        let envelope: DataEnvelope<OutletDetails> = self
            .get(&["outlets", id.as_str()], "Failed to fetch outlet details")
            .await?;
        Ok(envelope.data.outlet)
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = self.api.endpoint(segments)?;
        let response = self
            .api
            .inner
            .client
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::handle_response(response, fallback).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = self.api.endpoint(segments)?;
        let response = self
            .api
            .inner
            .client
            .patch(url)
            .bearer_auth(self.token.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::handle_response(response, fallback).await
    }

    /// Parse a JSON body on success, or turn the response into an error.
    async fn handle_response<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            return response.json().await.map_err(ApiError::Decode);
        }

        Err(Self::parse_error(response, fallback).await)
    }

    async fn parse_error(response: Response, fallback: &str) -> ApiError {
        let status = response.status();
        let body = response.bytes().await.unwrap_or_default();
        let message = extract_error_message(status, &body, fallback);

        warn!(status = status.as_u16(), message = %message, "Backend request failed");

        ApiError::Status { status, message }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let api = client("http://localhost:5000/api/v1");
        let url = api.endpoint(&["users", "profile", "update"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/v1/users/profile/update");
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let api = client("http://localhost:5000");
        let url = api.endpoint(&["outlets", "o1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/outlets/o1");
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let api = client("http://localhost:5000/api/v1");
        let url = api.endpoint(&["tenants", "a/b c", "details"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/v1/tenants/a%2Fb%20c/details"
        );
    }

    #[test]
    fn test_authorized_client_debug_redacts_token() {
        let api = client("http://localhost:5000/api/v1");
        let authorized = api.authorized(SecretString::from("eyJhbGciOi.secret"));
        let debug = format!("{authorized:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("eyJhbGciOi.secret"));
    }
}
