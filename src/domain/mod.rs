//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to the presentation layer
//! - `wire.rs` — Raw serde structs matching upstream responses
//! - `client.rs` — Sub-client with the HTTP-backed operations

pub mod history;
pub mod quote;
