//! Two-factor flow types and collaborator traits

use crate::error::Result;
use crate::models::{Authorization, NewAuthorization};
use crate::validate;
use async_trait::async_trait;
use std::fmt;

/// Delivery channel for a two-factor challenge code
///
/// Carried for display purposes only; the retry controller never
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoFactorChannel {
    /// Code generated by an authenticator application
    App,
    /// Code delivered by text message
    Sms,
}

impl TwoFactorChannel {
    /// Map the delivery token from an `X-GitHub-OTP` header value
    pub fn from_delivery(delivery: &str) -> Self {
        match delivery.trim() {
            "sms" => Self::Sms,
            _ => Self::App,
        }
    }
}

impl fmt::Display for TwoFactorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App => write!(f, "app"),
            Self::Sms => write!(f, "sms"),
        }
    }
}

/// Outcome of a two-factor challenge prompt
///
/// Produced by the caller's [`ChallengeHandler`]; consumed once per
/// retry iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwoFactorChallenge {
    /// The user entered a one-time code
    Code(String),
    /// The user asked for the code to be redelivered
    ResendRequested,
}

/// One attempt at creating an OAuth application authorization
///
/// Immutable once built; the retry controller derives per-attempt
/// copies that differ only in `two_factor_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    /// OAuth application client id
    pub client_id: String,
    /// OAuth application client secret
    pub client_secret: String,
    /// Requested scopes/note/fingerprint, opaque to the controller
    pub payload: NewAuthorization,
    /// One-time code for this attempt, if any
    pub two_factor_code: Option<String>,
}

impl AuthorizationRequest {
    /// Create a builder
    pub fn builder() -> AuthorizationRequestBuilder {
        AuthorizationRequestBuilder::default()
    }

    /// Copy of this request with no one-time code set
    #[must_use]
    pub fn without_code(&self) -> Self {
        Self {
            two_factor_code: None,
            ..self.clone()
        }
    }

    /// Copy of this request carrying the given one-time code
    #[must_use]
    pub fn with_code(&self, code: impl Into<String>) -> Self {
        Self {
            two_factor_code: Some(code.into()),
            ..self.clone()
        }
    }
}

/// Builder for [`AuthorizationRequest`]
///
/// `build` validates the required arguments: an unset field reports
/// a missing argument, a set-but-empty string reports an empty one.
#[derive(Debug, Default)]
pub struct AuthorizationRequestBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    payload: Option<NewAuthorization>,
    two_factor_code: Option<String>,
}

impl AuthorizationRequestBuilder {
    /// Set the OAuth application client id
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the OAuth application client secret
    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the authorization payload
    #[must_use]
    pub fn payload(mut self, payload: NewAuthorization) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Set a one-time code for the first attempt
    #[must_use]
    pub fn two_factor_code(mut self, code: impl Into<String>) -> Self {
        self.two_factor_code = Some(code.into());
        self
    }

    /// Validate the arguments and build the request
    pub fn build(self) -> Result<AuthorizationRequest> {
        let client_id = validate::required_string("client_id", self.client_id)?;
        let client_secret = validate::required_string("client_secret", self.client_secret)?;
        let payload = validate::required("payload", self.payload)?;
        Ok(AuthorizationRequest {
            client_id,
            client_secret,
            payload,
            two_factor_code: self.two_factor_code,
        })
    }
}

/// Capability to create an OAuth authorization
///
/// Implemented by the authorizations client; test doubles implement it
/// directly.
#[async_trait]
pub trait AuthorizationCreator: Send + Sync {
    /// Attempt to create an authorization
    ///
    /// Fails with [`crate::Error::TwoFactorRequired`] when the server
    /// demands a one-time code and with [`crate::Error::ChallengeFailed`]
    /// when a supplied code is rejected.
    async fn create_authorization(&self, request: &AuthorizationRequest) -> Result<Authorization>;
}

/// Caller-supplied prompt for a two-factor challenge
///
/// May be invoked more than once per flow (once per retry iteration).
#[async_trait]
pub trait ChallengeHandler: Send + Sync {
    /// Obtain a one-time code or a resend request from the user
    async fn handle(&self, channel: TwoFactorChannel) -> Result<TwoFactorChallenge>;
}
