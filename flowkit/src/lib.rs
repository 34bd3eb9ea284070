//! Deterministic toolkit for the "flow" meta-language.
//!
//! Flow is a minimal intermediate notation: any paradigm-specific rendering
//! can be produced from it, and structured descriptions of it can be boiled
//! down through a fixed-iteration reduction pipeline. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (paradigm rendering, value
//!   filters, the reduction pipeline). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (reading input documents, demo
//!   configuration). Isolated to enable mocking in tests.
//!
//! Static lookup tables ([`catalog`]) and the built-in seed document
//! ([`seed`]) are embedded read-only data; nothing mutates them after load.

pub mod catalog;
pub mod core;
pub mod io;
pub mod logging;
pub mod seed;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
