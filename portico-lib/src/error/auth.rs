//! Authentication error types

/// Errors returned by an [`Authentication`](crate::auth::Authentication)
/// provider.
///
/// The form shows `to_string()` of whatever the provider returns, so every
/// variant carries a message fit for the user.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Wrong email or password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The server answered with something we cannot act on.
    #[error("Something went wrong. Please try again soon.")]
    Unexpected,

    /// Network error during auth.
    #[error("Network error during auth: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse the authentication response.
    #[error("Auth response parse error: {0}")]
    Parse(String),
}
