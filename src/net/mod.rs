//! Networking modules for the platform's REST surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `session_client` owns the session lifecycle,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod session_client;
pub mod types;
