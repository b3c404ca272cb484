//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `shortcuts.rs` — add/list/dir/open/delete/master/help.
//!
//! ## Principles
//! - Parse/match CLI inputs and validate shortcut names here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod shortcuts;

pub use shortcuts::handle_shortcut_commands;
