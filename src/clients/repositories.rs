//! Repositories client

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::Repository;
use crate::pagination::{Paginated, QueryParams};
use crate::validate;

/// Client for repository endpoints
pub struct RepositoriesClient<'a> {
    http: &'a HttpClient,
}

impl<'a> RepositoriesClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetch a single repository
    pub async fn get(&self, owner: &str, name: &str) -> Result<Repository> {
        validate::non_empty("owner", owner)?;
        validate::non_empty("name", name)?;
        self.http.get_json(&format!("/repos/{owner}/{name}")).await
    }

    /// Repositories of an organization, as a lazy paginated sequence
    ///
    /// Validation happens here; no request is issued until the returned
    /// handle is consumed.
    pub fn list_for_org(&self, org: &str) -> Result<Paginated<'a, Repository>> {
        validate::non_empty("org", org)?;
        Ok(Paginated::new(self.http, format!("/orgs/{org}/repos")))
    }

    /// Like [`Self::list_for_org`], with query parameters for the first page
    pub fn list_for_org_with(
        &self,
        org: &str,
        params: QueryParams,
    ) -> Result<Paginated<'a, Repository>> {
        validate::non_empty("org", org)?;
        Ok(Paginated::new(self.http, format!("/orgs/{org}/repos")).with_params(params))
    }
}
