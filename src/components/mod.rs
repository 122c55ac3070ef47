//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome while reading/writing shared state from
//! Leptos context providers.

pub mod dashboard;
pub mod header;
pub mod module_card;
pub mod toast;
