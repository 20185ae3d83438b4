//! Command handler layer.
//!
//! ## Files
//! - `check.rs` — the declared-vs-referenced reconciliation pipeline.
//!
//! ## Principles
//! - Parse/match CLI inputs before this layer; handlers take a built config.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
