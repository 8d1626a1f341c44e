//! OAuth authorizations client

use crate::auth::{
    authorize_with_two_factor, AuthorizationCreator, AuthorizationRequest, ChallengeHandler,
};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig, OTP_HEADER};
use crate::models::Authorization;
use async_trait::async_trait;
use serde_json::json;

/// Client for the OAuth application authorizations endpoints
pub struct AuthorizationsClient<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthorizationsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Get or create an authorization for an OAuth application
    ///
    /// One attempt only: a two-factor demand surfaces as
    /// [`Error::TwoFactorRequired`]. Use [`Self::create_with_two_factor`]
    /// to run the whole challenge flow.
    pub async fn create(&self, request: &AuthorizationRequest) -> Result<Authorization> {
        let mut body = serde_json::to_value(&request.payload)?;
        body.as_object_mut()
            .ok_or_else(|| Error::Other("authorization payload must be an object".to_string()))?
            .insert("client_secret".to_string(), json!(request.client_secret));

        let mut config = RequestConfig::new().json(body);
        if let Some(code) = &request.two_factor_code {
            config = config.header(OTP_HEADER, code);
        }

        self.http
            .put_json(
                &format!("/authorizations/clients/{}", request.client_id),
                config,
            )
            .await
    }

    /// Create an authorization, prompting the handler for one-time codes
    ///
    /// Runs the two-factor retry flow: on [`Error::TwoFactorRequired`]
    /// the handler supplies a code or a resend request; everything else
    /// is terminal.
    pub async fn create_with_two_factor(
        &self,
        handler: &dyn ChallengeHandler,
        request: &AuthorizationRequest,
    ) -> Result<Authorization> {
        authorize_with_two_factor(self, handler, request).await
    }
}

#[async_trait]
impl AuthorizationCreator for AuthorizationsClient<'_> {
    async fn create_authorization(&self, request: &AuthorizationRequest) -> Result<Authorization> {
        self.create(request).await
    }
}
