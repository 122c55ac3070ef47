//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (gate installation, form
//! handlers) and delegates rendering details to `components`.

pub mod assistant;
pub mod auth;
pub mod dashboards;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
