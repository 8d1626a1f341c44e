//! HTTP connection layer
//!
//! The transport every resource client delegates to: URL joining,
//! default headers, token auth, bounded retries with backoff,
//! client-side throttling, and mapping of GitHub's error responses
//! (including two-factor challenges) onto [`crate::Error`] kinds.

mod client;
mod rate_limit;

pub use client::{
    BackoffType, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig,
    DEFAULT_API_ROOT, OTP_HEADER,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
