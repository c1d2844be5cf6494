//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `route_guard` and `update_notifier` carry the access and update logic;
//! `toaster` and `spinner` are the presentation primitives they render with.

pub mod route_guard;
pub mod spinner;
pub mod toaster;
pub mod update_notifier;
