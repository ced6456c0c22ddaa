//! Persistence module for user preferences
//!
//! Key/value preference storage with an in-memory and a JSON file backend.

mod error;
mod store;

pub use error::PreferenceError;
pub use store::{load_json, save_json, JsonFileStore, MemoryStore, PreferenceStore};
