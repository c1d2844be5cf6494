//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `role`, `toast`, `update`) and kept as
//! plain structs with pure transitions. Components wrap them in `RwSignal`s
//! provided via context.

pub mod auth;
pub mod role;
pub mod toast;
pub mod update;
