//! Role classification for the signed-in user.
//!
//! DESIGN
//! ======
//! `RoleState` is bound to one identity at a time. Every identity change
//! bumps a generation counter; a lookup response is applied only if it
//! carries the current generation, so a slow response for a previous user
//! can never overwrite the role of the current one.
//!
//! Consumers never read `RoleState` directly. They read a [`RoleView`]
//! computed against the identity they currently see, which reports
//! `loading` until the state has been resolved for that same identity.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Access level attached to an identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// No lookup has completed for the current identity.
    #[default]
    Unresolved,
    Admin,
    Viewer,
    Master,
}

impl Role {
    /// Parse a stored role value. Unknown values map to `Viewer`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "master" => Self::Master,
            _ => Self::Viewer,
        }
    }

    /// Role for a completed lookup. A missing value is the least-privileged role.
    pub fn from_lookup(value: Option<&str>) -> Self {
        value.map_or(Self::Viewer, Self::parse)
    }

    /// Admin pages are open to admins and masters.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::Master)
    }

    pub fn is_viewer(self) -> bool {
        self == Self::Viewer
    }

    pub fn is_master(self) -> bool {
        self == Self::Master
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Admin => "admin",
            Self::Viewer => "viewer",
            Self::Master => "master",
        }
    }
}

/// A lookup the resolver must issue for the current identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRequest {
    pub generation: u64,
    pub user_id: String,
}

/// What consumers observe: the role and whether it is still being fetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleView {
    pub role: Role,
    pub loading: bool,
}

impl RoleView {
    pub fn is_admin(self) -> bool {
        self.role.is_admin()
    }

    pub fn is_viewer(self) -> bool {
        self.role.is_viewer()
    }

    pub fn is_master(self) -> bool {
        self.role.is_master()
    }
}

/// Role resolution state for one identity at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleState {
    role: Role,
    loading: bool,
    generation: u64,
    user_id: Option<String>,
}

impl RoleState {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Rebind to a new identity.
    ///
    /// An absent identity clears the role synchronously. A present one
    /// starts loading and yields the lookup to perform.
    pub fn begin(&mut self, identity: Option<&str>) -> Option<RoleRequest> {
        self.generation = self.generation.wrapping_add(1);
        self.role = Role::Unresolved;
        self.user_id = identity.map(str::to_owned);
        match identity {
            None => {
                self.loading = false;
                None
            }
            Some(user_id) => {
                self.loading = true;
                Some(RoleRequest { generation: self.generation, user_id: user_id.to_owned() })
            }
        }
    }

    /// Settle the lookup tagged `generation`.
    ///
    /// Returns `false` and leaves the state untouched for stale or duplicate
    /// responses. Role and loading change together.
    pub fn apply(&mut self, generation: u64, role: Role) -> bool {
        if generation != self.generation || !self.loading {
            return false;
        }
        self.role = if role == Role::Unresolved { Role::Viewer } else { role };
        self.loading = false;
        true
    }

    /// The role as seen by a consumer whose current identity is `identity`.
    pub fn view_for(&self, identity: Option<&str>) -> RoleView {
        match identity {
            None => RoleView { role: Role::Unresolved, loading: false },
            Some(id) if self.user_id.as_deref() == Some(id) => RoleView { role: self.role, loading: self.loading },
            Some(_) => RoleView { role: Role::Unresolved, loading: true },
        }
    }
}
