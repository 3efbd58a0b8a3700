//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each view owns its own fetched data (`posts`) and fetch guard
//! (`generation`). `session` is the one value shared app-wide, provided via
//! Leptos context, and `admin_gate` drives the dashboard guard.

pub mod admin_gate;
pub mod generation;
pub mod posts;
pub mod session;
