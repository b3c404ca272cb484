//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `shortcuts.rs` — add/list/dir/delete/open/master against the store.
//! - `storage.rs` — store file codec and load/save.
//! - `launcher.rs` — terminal and editor processes behind a trait.
//! - `config.rs` — settings resolution (store path, editor, terminal).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod launcher;
pub mod output;
pub mod shortcuts;
pub mod storage;
