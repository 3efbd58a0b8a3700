//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Home-page sections own their fetched data; the sidebar is dashboard chrome
//! rendered only once the admin gate has passed.

pub mod dashboard_sidebar;
pub mod lifestyle_grid;
pub mod modern_section;
pub mod must_read;
