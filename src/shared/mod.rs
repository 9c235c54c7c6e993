//! Shared utilities used across all domain modules.

pub mod fmt;

pub use fmt::num::{display_with_decimals, group_thousands, usd};
