//! Small browser-facing utilities.

pub mod token_store;
