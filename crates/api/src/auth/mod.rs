//! Identity-provider collaborator.
//!
//! - [`verifier::TokenVerifier`] -- the injected token verification seam.
//! - [`verifier::MockGoogleVerifier`] -- the stand-in Google client.

pub mod verifier;
