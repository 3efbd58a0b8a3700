//! Networking modules for the external posts/admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies failures; `types` defines the
//! JSON wire schema the backend returns.

pub mod api;
pub mod types;
