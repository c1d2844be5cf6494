//! Wire types shared by the session and role endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the session endpoint.
///
/// Only `id` matters for access decisions; the rest is display data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name to show in page chrome: display name, then email, then id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// One row of the role table, restricted to the `role` column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RoleRow {
    #[serde(default)]
    pub role: Option<String>,
}
