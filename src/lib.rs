//! Fluent SQL statement builder and typed, batched parameter binder.
//!
//! This crate re-exports [`sqlwrap_core`]. Pick a backend crate (for example
//! `sqlwrap-sqlite`) to actually talk to a database.
pub use sqlwrap_core::*;
