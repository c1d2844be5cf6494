//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each protected page wraps its content in `RouteGuard`; the guard owns
//! every access decision so pages only render.

pub mod admin;
pub mod home;
pub mod panel;
pub mod select;
