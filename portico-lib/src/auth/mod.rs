//! Authentication

mod remote;

pub use remote::RemoteAuthentication;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Credentials submitted by the login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationParams {
    pub email: String,
    pub password: String,
}

impl AuthenticationParams {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for AuthenticationParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationParams")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The account returned by a successful authentication.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl AccountModel {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl std::fmt::Debug for AccountModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountModel")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Trait for authenticating a user from the login form.
///
/// Implementations own transport, timeouts and retries. The form issues at
/// most one call per accepted submit and never cancels it.
#[async_trait]
pub trait Authentication: Send + Sync {
    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_uses_camel_case_token() {
        let account: AccountModel = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        assert_eq!(account, AccountModel::new("abc"));
    }

    #[test]
    fn test_params_debug_hides_password() {
        let params = AuthenticationParams::new("ana@example.com", "hunter22");
        let debug = format!("{:?}", params);
        assert!(debug.contains("ana@example.com"));
        assert!(!debug.contains("hunter22"));
    }
}
