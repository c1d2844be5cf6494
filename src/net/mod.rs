//! Networking modules for the auth and role collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the session endpoint, `role_store` performs the single-row
//! role lookup, and `types` defines the shared wire schema.

pub mod api;
pub mod role_store;
pub mod types;
