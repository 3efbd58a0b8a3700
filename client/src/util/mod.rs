//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter/sort/paginate/date helpers here are pure so views stay thin and
//! the derivations are testable without a browser. `storage` isolates the
//! `localStorage` glue.

pub mod category;
pub mod date;
pub mod pagination;
pub mod storage;
