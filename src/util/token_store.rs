//! Durable storage for the session token.
//!
//! Wraps `localStorage` under a single well-known key so the session
//! survives reloads. When storage is unavailable (privacy mode, quota,
//! non-browser build) the module degrades silently to a thread-local
//! in-memory cell, keeping auth working for the lifetime of the page.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

thread_local! {
    static MEMORY: RefCell<Option<String>> = const { RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The stored token, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_KEY) {
                return Some(token);
            }
        }
    }
    MEMORY.with(|cell| cell.borrow().clone())
}

/// Persist a token, replacing any previous value.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(TOKEN_KEY, token).is_ok() {
                return;
            }
        }
    }
    MEMORY.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
}

/// Remove the stored token. Safe to call when nothing is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    MEMORY.with(|cell| *cell.borrow_mut() = None);
}
