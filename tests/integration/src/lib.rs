//! Integration test utilities for AXTRESO
//!
//! This crate provides an in-memory store and helpers for running
//! end-to-end tests against the REST API.

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::MemoryStore;
