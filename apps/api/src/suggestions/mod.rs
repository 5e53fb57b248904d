//! Autocomplete suggestions: remote endpoint with a static fallback, plus a
//! debouncer for keystroke-driven lookups.

pub mod client;
pub mod debounce;
pub mod handlers;
