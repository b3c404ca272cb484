//! Shared data model layer (types only).
//!
//! ## Files
//! - `models.rs` — shortcut name/record types, command outcomes, JSON envelope.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or process side effects.
//!
//! ## Compatibility note
//! `Outcome` is the `data` field of `--json` output. Renaming variants or
//! fields changes that contract.

pub mod models;
