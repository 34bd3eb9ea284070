//! Deterministic, pure logic shared by the toolkit.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests. Every function
//! here is total: no input produces an error.

pub mod paradigm;
pub mod pipeline;
pub mod prune;
pub mod shrink;
pub mod value;
