//! Client configuration baked in at build time.
//!
//! The browser bundle has no process environment, so values are captured
//! with `option_env!` when the crate is compiled. Every key is optional;
//! missing or blank values use the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SESSION_URL: &str = "/api/auth/me";
pub const DEFAULT_LOGOUT_URL: &str = "/api/auth/logout";
pub const DEFAULT_SIGN_IN_URL: &str = "/auth/login";
pub const DEFAULT_ROLES_URL: &str = "/rest/v1/user_roles";
pub const DEFAULT_SW_URL: &str = "/sw.js";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an absolute http(s) URL or a root-relative path, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Endpoints and keys used by the collaborator adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub session_url: String,
    pub logout_url: String,
    pub sign_in_url: String,
    pub roles_url: String,
    pub api_key: Option<String>,
    pub sw_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_url: DEFAULT_SESSION_URL.to_owned(),
            logout_url: DEFAULT_LOGOUT_URL.to_owned(),
            sign_in_url: DEFAULT_SIGN_IN_URL.to_owned(),
            roles_url: DEFAULT_ROLES_URL.to_owned(),
            api_key: None,
            sw_url: DEFAULT_SW_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional:
    /// - `PORTAL_SESSION_URL`: current-user endpoint, default `/api/auth/me`
    /// - `PORTAL_LOGOUT_URL`: sign-out endpoint, default `/api/auth/logout`
    /// - `PORTAL_SIGN_IN_URL`: sign-in page, default `/auth/login`
    /// - `PORTAL_ROLES_URL`: role table REST endpoint, default `/rest/v1/user_roles`
    /// - `PORTAL_API_KEY`: sent as `apikey` + bearer token on role lookups
    /// - `PORTAL_SW_URL`: service worker script, default `/sw.js`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when a URL value is neither
    /// `http(s)://...` nor root-relative.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            session_url: url_var(&lookup, "PORTAL_SESSION_URL", DEFAULT_SESSION_URL)?,
            logout_url: url_var(&lookup, "PORTAL_LOGOUT_URL", DEFAULT_LOGOUT_URL)?,
            sign_in_url: url_var(&lookup, "PORTAL_SIGN_IN_URL", DEFAULT_SIGN_IN_URL)?,
            roles_url: url_var(&lookup, "PORTAL_ROLES_URL", DEFAULT_ROLES_URL)?,
            api_key: lookup("PORTAL_API_KEY")
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty()),
            sw_url: url_var(&lookup, "PORTAL_SW_URL", DEFAULT_SW_URL)?,
        })
    }

    /// Config captured from the compile-time environment.
    ///
    /// An invalid value is logged and the whole config falls back to defaults.
    pub fn from_build_env() -> Self {
        match Self::from_lookup(build_var) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("client config invalid, using defaults: {e}");
                Self::default()
            }
        }
    }
}

fn build_var(key: &str) -> Option<String> {
    let raw = match key {
        "PORTAL_SESSION_URL" => option_env!("PORTAL_SESSION_URL"),
        "PORTAL_LOGOUT_URL" => option_env!("PORTAL_LOGOUT_URL"),
        "PORTAL_SIGN_IN_URL" => option_env!("PORTAL_SIGN_IN_URL"),
        "PORTAL_ROLES_URL" => option_env!("PORTAL_ROLES_URL"),
        "PORTAL_API_KEY" => option_env!("PORTAL_API_KEY"),
        "PORTAL_SW_URL" => option_env!("PORTAL_SW_URL"),
        _ => None,
    };
    raw.map(str::to_owned)
}

fn url_var<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default.to_owned());
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(default.to_owned());
    }
    let valid = value.starts_with("https://") || value.starts_with("http://") || value.starts_with('/');
    if !valid || value.starts_with("//") {
        return Err(ConfigError::InvalidUrl { var, value: value.to_owned() });
    }
    let trimmed = value.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok("/".to_owned());
    }
    Ok(trimmed.to_owned())
}
