//! Shared reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module defines a plain state struct created once in `App`, wrapped in
//! an `RwSignal` and provided via context. `auth` has exactly one writer (the
//! session client task); `ui` is written by whichever component raises a
//! toast or flips the theme.

pub mod auth;
pub mod ui;
