//! # Core Module
//!
//! Stateless building blocks of exhaustive ring perception: stable vertex
//! and edge handles, the validated immutable graph view, immutable paths,
//! and the deduplicated ring set returned to callers.
//!
//! Everything in this layer is a plain value with no interior mutability;
//! the stateful elimination machinery lives in [`crate::engine`].

pub mod models;
