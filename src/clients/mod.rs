//! Per-resource clients
//!
//! Thin wrappers over the HTTP connection: each entry point validates
//! its arguments before any network call, then delegates. A
//! representative slice of the API surface; the patterns here extend
//! mechanically to further resources.

mod authorizations;
mod issues;
mod repositories;

pub use authorizations::AuthorizationsClient;
pub use issues::IssuesClient;
pub use repositories::RepositoriesClient;

use crate::http::{HttpClient, HttpClientConfig};

/// Entry point for the SDK
///
/// Owns the HTTP connection and hands out per-resource clients that
/// borrow it.
#[derive(Debug)]
pub struct GitHubClient {
    http: HttpClient,
}

impl GitHubClient {
    /// Client against the public API, unauthenticated
    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
        }
    }

    /// Client authenticated with the given token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::with_token(token),
        }
    }

    /// Client with a custom connection configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self {
            http: HttpClient::with_config(config),
        }
    }

    /// The underlying HTTP connection
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// OAuth authorizations client
    pub fn authorizations(&self) -> AuthorizationsClient<'_> {
        AuthorizationsClient::new(&self.http)
    }

    /// Repositories client
    pub fn repositories(&self) -> RepositoriesClient<'_> {
        RepositoriesClient::new(&self.http)
    }

    /// Issues client
    pub fn issues(&self) -> IssuesClient<'_> {
        IssuesClient::new(&self.http)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}
