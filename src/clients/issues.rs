//! Issues client

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::Issue;
use crate::pagination::Paginated;
use crate::validate;

/// Client for issue endpoints
pub struct IssuesClient<'a> {
    http: &'a HttpClient,
}

impl<'a> IssuesClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Issues of a repository, as a lazy paginated sequence
    pub fn list_for_repository(&self, owner: &str, name: &str) -> Result<Paginated<'a, Issue>> {
        validate::non_empty("owner", owner)?;
        validate::non_empty("name", name)?;
        Ok(Paginated::new(
            self.http,
            format!("/repos/{owner}/{name}/issues"),
        ))
    }
}
