//! Authentication for DataHub API requests.
//!
//! Attaches the appropriate `Authorization` header to each outgoing
//! request. Session management (token refresh, login flows) lives in the
//! surrounding application, not in this crate.

use base64::{engine::general_purpose, Engine as _};

/// Authentication credentials for the DataHub service.
///
/// # Examples
///
/// ```rust
/// use datahub_link::AuthProvider;
///
/// // HTTP Basic Auth
/// let auth = AuthProvider::basic_auth("username".to_string(), "password".to_string());
///
/// // Bearer token authentication
/// let auth = AuthProvider::bearer_token("eyJhbGc...".to_string());
///
/// // No authentication (gateway handles the session)
/// let auth = AuthProvider::none();
/// ```
#[derive(Debug, Clone)]
pub enum AuthProvider {
    /// HTTP Basic Auth (username, password)
    BasicAuth(String, String),

    /// Bearer token authentication
    BearerToken(String),

    /// No authentication
    None,
}

impl AuthProvider {
    /// Create HTTP Basic Auth credentials.
    ///
    /// Encodes username:password as base64 for the `Authorization: Basic`
    /// header following RFC 7617.
    pub fn basic_auth(username: String, password: String) -> Self {
        Self::BasicAuth(username, password)
    }

    /// Create Bearer token authentication.
    pub fn bearer_token(token: String) -> Self {
        Self::BearerToken(token)
    }

    /// No authentication (an outer gateway or proxy owns the session).
    pub fn none() -> Self {
        Self::None
    }

    /// Attach the Authorization header matching the configured method:
    /// - BasicAuth: `Authorization: Basic <base64(username:password)>`
    /// - BearerToken: `Authorization: Bearer <token>`
    /// - None: no header
    pub fn apply_to_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::BasicAuth(username, password) => {
                let credentials =
                    general_purpose::STANDARD.encode(format!("{}:{}", username, password));
                request.header("Authorization", format!("Basic {}", credentials))
            }
            Self::BearerToken(token) => {
                request.header("Authorization", format!("Bearer {}", token))
            }
            Self::None => request,
        }
    }
}
