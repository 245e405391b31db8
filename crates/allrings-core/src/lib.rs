//! # AllRings Core Library
//!
//! An exhaustive ring-perception library for molecular graphs, based on the
//! path-merging (elimination-order) method of Hanser, Jauffret and Kaufmann.
//! Given a pure topological graph of atoms and bonds it enumerates *every*
//! simple cycle, not merely a minimum cycle basis. This is the property
//! that aromaticity detection, ring-dependent descriptors, and structural
//! validation all rely on.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep
//! the graph theory separable from its orchestration:
//!
//! - **[`core`]: The Foundation.** Immutable value types: stable vertex and
//!   edge handles, the validated read-only `GraphView`, immutable `Path`
//!   values with a non-mutating join, and the deduplicated `RingSet`.
//!
//! - **[`engine`]: The Logic Core.** The stateful elimination machinery:
//!   the endpoint-indexed path table, the degree-ordered vertex elimination
//!   loop, the live-path ceiling that bounds combinatorial blow-up, and
//!   structured diagnostic reporting.
//!
//! - **[`workflows`]: The Public API.** The entry point callers use:
//!   [`workflows::perceive::run`] splits the graph into connected
//!   components, perceives each independently, and merges the results.
//!
//! ## Scope
//!
//! The input is topology only: no bond orders, aromaticity flags, or other
//! chemical semantics are consumed or produced. Parallel edges between the
//! same vertex pair are supported and two of them form a valid ring of
//! size 2.

pub mod core;
pub mod engine;
pub mod workflows;
