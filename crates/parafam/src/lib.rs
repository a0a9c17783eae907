//! Parafam - Parametric Family Construction in Rust
//!
//! A parametric family is a mathematical object type fully determined by
//! explicit input parameters. Parafam builds every member through one
//! dispatcher that separates control options from domain parameters,
//! optionally validates the parameters against the family's
//! classification function, supports dry-run calls, and attaches to each
//! instance the normalized parameters needed to reconstruct it.
//!
//! # Example
//!
//! ```rust
//! use parafam::prelude::*;
//!
//! let params = Params::new().with_option("f", 0.35);
//! assert_eq!(params.float_option("f"), Some(0.35));
//! assert!(Classification::Extreme.establishes_extremality());
//! ```

// Core types
pub use parafam_core::{
    Classification, ConstructionRecord, DiagnosticSink, DispatchMode, FamilyError, FamilyInstance,
    NullSink, ParamValue, ParametricFamily, Params, Result,
};

// Configuration
pub use parafam_config::{ConfigError, ConstructionDefaults, DiagnosticsConfig, FactoryConfig};

// Dispatch engine
pub use parafam_factory::{
    BoxedValue, ConditionChecker, ControlOptions, DynInstance, DynOutcome, Factory,
    FamilyRegistry, Outcome, TracingSink, COMPUTE_ARGS_ONLY, CONDITIONCHECK,
};

pub mod prelude {
    pub use super::{
        Classification, ConstructionRecord, ControlOptions, DiagnosticSink, DispatchMode, Factory,
        FactoryConfig, FamilyError, FamilyInstance, FamilyRegistry, Outcome, ParamValue,
        ParametricFamily, Params,
    };
}
