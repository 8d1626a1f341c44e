//! Wire models for the GitHub REST API
//!
//! Serde representations of the API resources the crate works with.
//! Only the fields the representative clients need are modeled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An OAuth authorization issued by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    /// Server-assigned identifier
    pub id: u64,
    /// The OAuth token; only returned in full on creation
    pub token: String,
    /// Optional note describing the authorization
    #[serde(default)]
    pub note: Option<String>,
    /// Optional fingerprint distinguishing authorizations of the same app
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Granted scopes
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload describing a requested authorization
///
/// Opaque to the two-factor retry controller; it is sent unchanged on
/// every attempt of a flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthorization {
    /// Requested scopes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Note describing the authorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Fingerprint distinguishing authorizations of the same app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl NewAuthorization {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requested scope
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Set the note
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the fingerprint
    #[must_use]
    pub fn fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }
}

/// A repository as returned by list/get endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Server-assigned identifier
    pub id: u64,
    /// Short name, without the owner
    pub name: String,
    /// `owner/name` form
    #[serde(default)]
    pub full_name: Option<String>,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// An issue as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Server-assigned identifier
    pub id: u64,
    /// Issue number, unique within the repository
    pub number: u64,
    /// Title line
    pub title: String,
    /// `open` or `closed`
    #[serde(default)]
    pub state: Option<String>,
    /// Body text
    #[serde(default)]
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_authorization_deserialize() {
        let auth: Authorization = serde_json::from_value(json!({
            "id": 1,
            "token": "OAUTHSECRET",
            "note": "admin script",
            "scopes": ["repo", "user"],
            "created_at": "2016-02-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(auth.id, 1);
        assert_eq!(auth.token, "OAUTHSECRET");
        assert_eq!(auth.scopes, vec!["repo", "user"]);
        assert!(auth.created_at.is_some());
        assert!(auth.fingerprint.is_none());
    }

    #[test]
    fn test_new_authorization_serialize_skips_absent_fields() {
        let payload = NewAuthorization::new().scope("repo");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({ "scopes": ["repo"] }));

        let payload = NewAuthorization::new()
            .scope("repo")
            .note("ci")
            .fingerprint("build-42");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({ "scopes": ["repo"], "note": "ci", "fingerprint": "build-42" })
        );
    }

    #[test]
    fn test_repository_deserialize_minimal() {
        let repo: Repository = serde_json::from_value(json!({
            "id": 7,
            "name": "octoflow"
        }))
        .unwrap();

        assert_eq!(repo.name, "octoflow");
        assert!(!repo.private);
        assert!(repo.full_name.is_none());
    }
}
