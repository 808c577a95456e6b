//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Input events (key codes to directions)
//! - User dialogs (alert/confirm on web, scripted answers elsewhere)

pub mod dialogs;
pub mod input;
pub mod storage;

pub use dialogs::{Dialogs, ScriptedDialogs};
pub use input::direction_for_key_code;
pub use storage::{KeyValueStore, MemoryStore, store_or_fallback};
