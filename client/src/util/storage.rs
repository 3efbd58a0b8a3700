//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only reads live here so session code never touches `web-sys`
//! directly. On the server every read is `None`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read the raw string stored under `key`. Empty values count as absent.
pub fn read_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        if raw.is_empty() { None } else { Some(raw) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
