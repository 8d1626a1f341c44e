//! # octoflow
//!
//! A client SDK core for the GitHub REST API. Two subsystems carry the
//! control flow; everything else is thin per-resource plumbing over a
//! shared HTTP connection.
//!
//! ## Features
//!
//! - **Two-factor authorization flow**: create OAuth application
//!   authorizations, prompting a caller-supplied handler for one-time
//!   codes (with resend support) until success or a terminal failure
//! - **Lazy auto-pagination**: consume any paged list endpoint as a
//!   cold, demand-driven `Stream` of items following `Link: rel="next"`
//! - **Robust transport**: retries with backoff, client-side
//!   throttling, `Retry-After` handling, token auth
//! - **Strict argument validation**: missing and empty required
//!   arguments are rejected distinguishably before any network call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::stream::TryStreamExt;
//! use octoflow::{GitHubClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = GitHubClient::with_token("personal-access-token");
//!
//!     // Drain a paged endpoint lazily
//!     let repos: Vec<_> = client
//!         .repositories()
//!         .list_for_org("rust-lang")?
//!         .items()
//!         .try_collect()
//!         .await?;
//!
//!     println!("{} repositories", repos.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       GitHubClient                          │
//! │   authorizations()      repositories()        issues()      │
//! └─────────────────────────────────────────────────────────────┘
//!            │                     │
//! ┌──────────┴──────────┐ ┌────────┴────────────────────────────┐
//! │  Two-Factor Flow    │ │         Auto-Paginator              │
//! │  attempt → prompt   │ │  cold Stream, one fetch per page,   │
//! │  → code / resend    │ │  follows Link rel="next"            │
//! └──────────┬──────────┘ └────────┬────────────────────────────┘
//!            │                     │
//! ┌──────────┴─────────────────────┴────────────────────────────┐
//! │          HTTP connection (retry, backoff, throttle)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Wire models for API resources
pub mod models;

/// Two-factor authorization flow
pub mod auth;

/// HTTP connection with retry and rate limiting
pub mod http;

/// Auto-pagination over list endpoints
pub mod pagination;

/// Per-resource clients
pub mod clients;

mod validate;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use auth::{
    authorize_with_two_factor, AuthorizationCreator, AuthorizationRequest, ChallengeHandler,
    TwoFactorChallenge, TwoFactorChannel,
};
pub use clients::GitHubClient;
pub use models::{Authorization, Issue, NewAuthorization, Repository};
pub use pagination::{once_item, Page, PageFetcher, Paginated};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
