//! I/O helpers for toolkit commands.

pub mod config;
pub mod input;
