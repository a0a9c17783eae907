//! Parafam Core - Core types and traits for parametric families
//!
//! This crate provides the fundamental abstractions for Parafam:
//! - Classification verdicts for parameter sets
//! - Parameter values and parameter sets
//! - The `ParametricFamily` trait implemented by concrete families
//! - Construction records for persistence
//! - Diagnostic sink abstraction consumed during condition checking

pub mod classification;
pub mod diagnostics;
pub mod error;
pub mod family;
pub mod params;
pub mod record;

pub use classification::Classification;
pub use diagnostics::{DiagnosticSink, NullSink};
pub use error::{FamilyError, Result};
pub use family::{DispatchMode, ParametricFamily};
pub use params::{ParamValue, Params};
pub use record::{ConstructionRecord, FamilyInstance};
