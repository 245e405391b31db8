//! # Engine Module
//!
//! The stateful machinery of exhaustive ring perception: the elimination
//! loop that retires vertices one at a time, the path table it works over,
//! and the surrounding configuration, error, and diagnostics plumbing.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The live-path ceiling that bounds
//!   worst-case memory on densely fused ring systems
//! - **Error Handling** ([`error`]) - Invalid-input and complexity-abort
//!   conditions surfaced to the caller
//! - **Diagnostics** ([`progress`]) - Structured observer events emitted
//!   outside the algorithm's control flow
//!
//! The path table and the elimination loop itself are crate-internal;
//! callers drive a run through [`crate::workflows::perceive`].

pub mod config;
pub mod error;
pub(crate) mod path_table;
pub(crate) mod perception;
pub mod progress;
pub(crate) mod utils;
