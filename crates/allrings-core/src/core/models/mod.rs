//! # Core Models Module
//!
//! The fundamental data structures of ring perception: the immutable graph
//! view the engine reads from, the immutable paths it manipulates, and the
//! rings it produces.
//!
//! ## Key Components
//!
//! - [`ids`] - Stable handle types for vertices and edges
//! - [`graph`] - Graph construction with validation and the read-only [`graph::GraphView`]
//! - [`path`] - Immutable vertex/edge walks and the join operation
//! - [`ring`] - Canonical simple cycles and their set-based identity
//! - [`ring_set`] - The deduplicated, query-friendly collection of rings
//!
//! ## Usage
//!
//! ```ignore
//! use allrings::core::models::graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex();
//! let b = builder.add_vertex();
//! builder.add_edge(a, b)?;
//! let graph = builder.build();
//! ```

pub mod graph;
pub mod ids;
pub mod path;
pub mod ring;
pub mod ring_set;
