//! # Workflows Module
//!
//! High-level entry points tying the core models and the engine together.
//!
//! ## Architecture
//!
//! - **Perception Workflow** ([`perceive`]) - Complete exhaustive ring
//!   perception: component splitting, per-component elimination, and
//!   merging into one deduplicated ring set.

pub mod perceive;
