//! Shared utilities for the string cleaner crates.
//!
//! This crate provides strict Polars accessors: values are accepted only
//! when they are strings or nulls, and nothing is coerced.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_nullable_str, dtype_name, string_chunked};
