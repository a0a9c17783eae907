//! Parafam Factory - Construction Dispatch Engine
//!
//! This crate provides the single interception point through which every
//! parametric family member is built:
//! - `Factory` - the typed construction dispatcher
//! - `ConditionChecker` - classification-gated validation
//! - `ControlOptions` - control parameter extraction
//! - `FamilyRegistry` - name-keyed dynamic construction for persistence
//!   collaborators
//! - Diagnostic sink wiring (tracing-backed by default)

pub mod check;
pub mod factory;
pub mod options;
pub mod registry;
pub mod sink;

pub use check::ConditionChecker;
pub use factory::{Factory, Outcome};
pub use options::{ControlOptions, COMPUTE_ARGS_ONLY, CONDITIONCHECK};
pub use registry::{BoxedValue, DynInstance, DynOutcome, FamilyRegistry};
pub use sink::TracingSink;
