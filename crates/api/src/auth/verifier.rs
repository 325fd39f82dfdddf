//! Bearer-token verification against the external identity provider.
//!
//! The provider is an injected collaborator constructed once at process
//! start and carried in [`crate::state::AppState`], so tests can substitute
//! a fake and no module-level singleton exists. Real Google verification is
//! out of scope; [`MockGoogleVerifier`] is the only shipped implementation.

use async_trait::async_trait;

use gitshelf_core::error::CoreError;

/// A verified identity-provider principal.
///
/// `subject` is the provider's stable identifier for the account and is the
/// key used to look up or create the local user row.
#[derive(Debug, Clone)]
pub struct Principal {
    pub subject: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Verifies an opaque bearer token and returns the principal it belongs to.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token`, returning the principal or `CoreError::Unauthorized`.
    async fn verify(&self, token: &str) -> Result<Principal, CoreError>;
}

/// The token accepted by the mock verifier.
pub const MOCK_GOOGLE_TOKEN: &str = "mock_google_token";

/// Stand-in for the Google token endpoint.
///
/// Accepts exactly one well-known token and returns a fixed profile;
/// everything else is rejected as unauthorized.
#[derive(Debug, Default)]
pub struct MockGoogleVerifier;

#[async_trait]
impl TokenVerifier for MockGoogleVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, CoreError> {
        if token == MOCK_GOOGLE_TOKEN {
            return Ok(Principal {
                subject: "google_user_123".to_string(),
                email: "user@example.com".to_string(),
                name: "John Doe".to_string(),
                picture: Some(
                    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32"
                        .to_string(),
                ),
            });
        }
        Err(CoreError::Unauthorized("Invalid token".into()))
    }
}
