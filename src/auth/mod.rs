//! Two-factor authorization flow
//!
//! # Overview
//!
//! Creating an OAuth application authorization can fail because the
//! account requires a one-time code. This module orchestrates that
//! exchange: attempt the creation, prompt the caller's challenge
//! handler when a code is demanded, and retry with the code (or
//! reissue the original request when the user asks for a resend).
//!
//! Only [`crate::Error::TwoFactorRequired`] triggers the retry branch;
//! every other failure, including a rejected code, propagates to the
//! caller unchanged.

mod types;

pub use types::{
    AuthorizationCreator, AuthorizationRequest, AuthorizationRequestBuilder, ChallengeHandler,
    TwoFactorChallenge, TwoFactorChannel,
};

use crate::error::{Error, Result};
use crate::models::Authorization;
use tracing::debug;

/// Run the two-factor authorization flow to completion
///
/// The first attempt carries no one-time code. On
/// [`Error::TwoFactorRequired`] the handler is prompted with the
/// delivery channel (threaded through opaquely):
///
/// - [`TwoFactorChallenge::ResendRequested`] reissues the original
///   no-code request, which makes the server redeliver the challenge.
/// - [`TwoFactorChallenge::Code`] triggers exactly one with-code
///   attempt. A rejected code surfaces as [`Error::ChallengeFailed`]
///   and is never retried here; another `TwoFactorRequired` re-enters
///   the prompt loop.
///
/// The flow holds no state beyond the request record, so dropping the
/// returned future at any await point aborts it cleanly.
pub async fn authorize_with_two_factor(
    creator: &dyn AuthorizationCreator,
    handler: &dyn ChallengeHandler,
    request: &AuthorizationRequest,
) -> Result<Authorization> {
    let base = request.without_code();
    let mut attempt = base.clone();

    loop {
        match creator.create_authorization(&attempt).await {
            Ok(authorization) => return Ok(authorization),
            Err(Error::TwoFactorRequired { channel }) => {
                match handler.handle(channel).await? {
                    TwoFactorChallenge::ResendRequested => {
                        debug!(client_id = %base.client_id, "resend requested, reissuing authorization request");
                        attempt = base.clone();
                    }
                    TwoFactorChallenge::Code(code) => {
                        attempt = base.with_code(code);
                    }
                }
            }
            Err(other) => return Err(other),
        }
    }
}
