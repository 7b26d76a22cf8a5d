//! HTTP authentication against a JSON login endpoint

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use super::{AccountModel, Authentication, AuthenticationParams};
use crate::error::AuthError;

/// Authenticates by POSTing the credentials as JSON to `<base_url>/login`.
///
/// - `200 OK` with `{"accessToken": "..."}` yields the account
/// - `401 Unauthorized` maps to [`AuthError::InvalidCredentials`]
/// - any other status maps to [`AuthError::Unexpected`]
///
/// # Example
///
/// ```ignore
/// use portico_lib::auth::{Authentication, AuthenticationParams, RemoteAuthentication};
///
/// let auth = RemoteAuthentication::new("https://api.example.com/")?;
/// let account = auth
///     .auth(AuthenticationParams::new("ana@example.com", "secret"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct RemoteAuthentication {
    login_url: Url,
    http_client: reqwest::Client,
}

impl RemoteAuthentication {
    /// Creates a new remote authentication for the API at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Creates a new remote authentication using an existing HTTP client.
    pub fn with_client(
        base_url: &str,
        http_client: reqwest::Client,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            login_url: login_url(base_url)?,
            http_client,
        })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }
}

#[async_trait]
impl Authentication for RemoteAuthentication {
    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, AuthError> {
        log::debug!("POST {}", self.login_url);

        let response = self
            .http_client
            .post(self.login_url.clone())
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        map_response(status, &body)
    }
}

/// Resolve the login endpoint, treating `base_url` as a directory.
fn login_url(base_url: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("login")
}

fn map_response(status: StatusCode, body: &[u8]) -> Result<AccountModel, AuthError> {
    match status {
        StatusCode::OK => {
            serde_json::from_slice(body).map_err(|e| AuthError::Parse(e.to_string()))
        }
        StatusCode::UNAUTHORIZED => Err(AuthError::InvalidCredentials),
        other => {
            log::warn!("Unexpected login response status: {}", other);
            Err(AuthError::Unexpected)
        }
    }
}
