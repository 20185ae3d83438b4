//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `diff.rs` — added-declaration extraction from the env file's history.
//! - `github.rs` — reference document fetch + PR comment publishing.
//! - `topics.rs` — reference document parsing and subject flattening.
//! - `reconcile.rs` — declared-vs-referenced membership + report rendering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod diff;
pub mod github;
pub mod output;
pub mod reconcile;
pub mod topics;
