//! Role storage collaborator: a single-row point lookup by user id.
//!
//! DESIGN
//! ======
//! The resolver only needs "the role string for this user, if any", so the
//! seam is one async method. `RestRoleStore` speaks the PostgREST dialect
//! exposed by the hosted role table; tests substitute in-memory stores.

#[cfg(test)]
#[path = "role_store_test.rs"]
mod role_store_test;

use std::future::Future;

use crate::config::ClientConfig;

/// Media type asking PostgREST for exactly one row as a bare object.
/// Zero or several matching rows come back as an error status.
pub const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleLookupError {
    #[error("role lookup transport error: {0}")]
    Transport(String),
    #[error("role lookup failed: {0}")]
    Status(u16),
    #[error("role lookup response malformed: {0}")]
    Decode(String),
    #[error("role lookup unavailable outside the browser")]
    Unavailable,
}

/// Point lookup of a user's stored role.
pub trait RoleStore {
    /// Fetch the raw role value for `user_id`.
    ///
    /// `Ok(None)` means the row exists but carries no role.
    fn fetch_role(&self, user_id: &str) -> impl Future<Output = Result<Option<String>, RoleLookupError>>;
}

/// Role table reached over HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestRoleStore {
    roles_url: String,
    api_key: Option<String>,
}

impl RestRoleStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self { roles_url: config.roles_url.clone(), api_key: config.api_key.clone() }
    }

    fn query_url(&self, user_id: &str) -> String {
        format!(
            "{}?user_id=eq.{}&select=role&limit=1",
            self.roles_url,
            urlencoding::encode(user_id)
        )
    }
}

impl RoleStore for RestRoleStore {
    fn fetch_role(&self, user_id: &str) -> impl Future<Output = Result<Option<String>, RoleLookupError>> {
        let url = self.query_url(user_id);
        let api_key = self.api_key.clone();
        async move {
            #[cfg(feature = "hydrate")]
            {
                use super::types::RoleRow;

                let mut request = gloo_net::http::Request::get(&url).header("Accept", SINGLE_OBJECT_ACCEPT);
                if let Some(key) = api_key.as_deref() {
                    request = request
                        .header("apikey", key)
                        .header("Authorization", &format!("Bearer {key}"));
                }
                let resp = request
                    .send()
                    .await
                    .map_err(|e| RoleLookupError::Transport(e.to_string()))?;
                if !resp.ok() {
                    return Err(RoleLookupError::Status(resp.status()));
                }
                let row: RoleRow = resp
                    .json()
                    .await
                    .map_err(|e| RoleLookupError::Decode(e.to_string()))?;
                Ok(row.role)
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (url, api_key);
                Err(RoleLookupError::Unavailable)
            }
        }
    }
}
