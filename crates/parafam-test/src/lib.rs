//! Shared test fixtures for Parafam crates.
//!
//! This crate provides small families and a capturing diagnostic sink
//! for testing the dispatch protocol. It does NOT depend on
//! `parafam-factory` to avoid circular dependencies.
//!
//! - [`families`] - one family per classification outcome, plus
//!   constructors that fail or record what they were given
//! - [`sink`] - a sink that captures diagnostics for assertions
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! parafam-test = { workspace = true }
//! ```

pub mod families;
pub mod sink;

pub use families::{
    AffineShift, BrittleFunction, CallSketch, FreeformFunction, GuardedFunction, StepFunction,
    SymmetricKink,
};
pub use sink::MemorySink;
