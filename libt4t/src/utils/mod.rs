//! Utilities for libt4t: small, reusable helpers used across the crate.
//!
//! `bytes` holds the pattern matching and slicing primitives the command
//! dispatcher and response composer are built on; `hex` renders frames for
//! logs and parses them in tests and demos.

pub mod bytes;
pub mod hex;

pub use bytes::*;
pub use hex::*;
