//! Name-keyed dynamic construction.
//!
//! A persistence layer reloading a saved [`ConstructionRecord`] holds a
//! family *name*, not a type. The registry maps names to builders so
//! such collaborators can re-enter the dispatch protocol without
//! compile-time knowledge of the family.
//!
//! Unlike the typed path, the value crossing a registered builder is
//! type-erased, so the dispatcher verifies that what came back really is
//! the registered type. A mismatch is a contract violation: a defect in
//! a concrete family delegating to the wrong builder, never recovered.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use parafam_core::{
    Classification, ConstructionRecord, DiagnosticSink, DispatchMode, FamilyError, FamilyInstance,
    NullSink, ParametricFamily, Params, Result,
};

use crate::check::ConditionChecker;
use crate::options::{ControlOptions, COMPUTE_ARGS_ONLY, CONDITIONCHECK};

/// Type-erased value produced by a registered builder.
pub type BoxedValue = Box<dyn Any + Send + Sync>;

type BoxedBuilder = Box<dyn Fn(&Params) -> Result<BoxedValue> + Send + Sync>;

struct FamilyEntry {
    type_id: TypeId,
    type_name: &'static str,
    mode: DispatchMode,
    classify: fn(&Params) -> Option<Classification>,
    build: BoxedBuilder,
}

/// Result of one dynamic construction call.
#[derive(Debug)]
pub enum DynOutcome {
    /// A member was built; downcast it to recover the concrete type.
    Constructed(DynInstance),

    /// Dry run: the normalized parameters the final call would use.
    ArgsOnly(ConstructionRecord),

    /// The family bypasses dispatch entirely.
    Introspective,
}

impl DynOutcome {
    /// Returns the built instance, if this call constructed one.
    pub fn into_instance(self) -> Option<DynInstance> {
        match self {
            DynOutcome::Constructed(instance) => Some(instance),
            _ => None,
        }
    }

    /// Returns the normalized record of a dry run.
    pub fn into_args(self) -> Option<ConstructionRecord> {
        match self {
            DynOutcome::ArgsOnly(record) => Some(record),
            _ => None,
        }
    }
}

/// A type-erased family member with its construction record.
pub struct DynInstance {
    value: BoxedValue,
    record: ConstructionRecord,
}

impl std::fmt::Debug for DynInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynInstance")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl DynInstance {
    /// The construction record attached at build time.
    pub fn record(&self) -> &ConstructionRecord {
        &self.record
    }

    /// Returns true if the underlying value is an `F`.
    pub fn is<F: ParametricFamily>(&self) -> bool {
        self.value.as_ref().type_id() == TypeId::of::<F>()
    }

    /// Borrows the underlying value as an `F`, if it is one.
    pub fn downcast_ref<F: ParametricFamily>(&self) -> Option<&F> {
        self.value.downcast_ref::<F>()
    }

    /// Recovers the typed instance, or returns `self` unchanged if the
    /// value is not an `F`.
    pub fn downcast<F: ParametricFamily>(self) -> std::result::Result<FamilyInstance<F>, Self> {
        let DynInstance { value, record } = self;
        match value.downcast::<F>() {
            Ok(boxed) => Ok(FamilyInstance::new(*boxed, record)),
            Err(value) => Err(DynInstance { value, record }),
        }
    }
}

/// Registry of families constructible by name.
///
/// # Example
///
/// ```
/// use parafam_core::{ParametricFamily, Params, Result};
/// use parafam_factory::FamilyRegistry;
///
/// struct Shift {
///     offset: f64,
/// }
///
/// impl ParametricFamily for Shift {
///     const NAME: &'static str = "shift";
///
///     fn construct(params: &Params) -> Result<Self> {
///         Ok(Shift {
///             offset: params.float_option("offset").unwrap_or(0.0),
///         })
///     }
/// }
///
/// let mut registry = FamilyRegistry::new();
/// registry.register::<Shift>();
/// assert!(registry.contains("shift"));
/// ```
#[derive(Default)]
pub struct FamilyRegistry {
    entries: HashMap<&'static str, FamilyEntry>,
}

impl FamilyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers family `F` under [`ParametricFamily::NAME`] with its
    /// own constructor. This path cannot violate the type contract.
    pub fn register<F: ParametricFamily>(&mut self) {
        self.register_with::<F>(|params| {
            F::construct(params).map(|value| Box::new(value) as BoxedValue)
        });
    }

    /// Registers family `F` with a custom builder, for families whose
    /// construction delegates elsewhere. The value the builder returns
    /// is checked against `F` at every construction.
    pub fn register_with<F: ParametricFamily>(
        &mut self,
        build: impl Fn(&Params) -> Result<BoxedValue> + Send + Sync + 'static,
    ) {
        self.entries.insert(
            F::NAME,
            FamilyEntry {
                type_id: TypeId::of::<F>(),
                type_name: std::any::type_name::<F>(),
                mode: F::MODE,
                classify: F::classify,
                build: Box::new(build),
            },
        );
    }

    /// Returns true if a family is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered family names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Builds a member of the family registered under `name`, applying
    /// the same dispatch steps as the typed path.
    ///
    /// # Errors
    ///
    /// [`FamilyError::UnknownFamily`] on a lookup miss;
    /// [`FamilyError::ContractViolation`] if a custom builder produced a
    /// value of the wrong type; otherwise as the typed path.
    pub fn construct(
        &self,
        name: &str,
        mut params: Params,
        sink: &dyn DiagnosticSink,
    ) -> Result<DynOutcome> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| FamilyError::UnknownFamily(name.to_owned()))?;

        if entry.mode == DispatchMode::Introspective {
            return Ok(DynOutcome::Introspective);
        }

        let options = ControlOptions::extract(&mut params.named)?;

        if options.conditioncheck {
            ConditionChecker::new(sink).apply((entry.classify)(&params))?;
        }

        if options.compute_args_only {
            return Ok(DynOutcome::ArgsOnly(ConstructionRecord::new(
                name,
                params.positional,
                params.named,
            )));
        }

        let value = (entry.build)(&params)?;
        if value.as_ref().type_id() != entry.type_id {
            return Err(FamilyError::ContractViolation {
                family: name.to_owned(),
                expected: entry.type_name.to_owned(),
            });
        }

        let record = ConstructionRecord::new(name, params.positional, params.named);
        Ok(DynOutcome::Constructed(DynInstance { value, record }))
    }

    /// Replays a saved record with the condition check disabled, per the
    /// persistence contract.
    pub fn replay(&self, record: &ConstructionRecord) -> Result<DynOutcome> {
        let params = record
            .params()
            .with_option(CONDITIONCHECK, false)
            .with_option(COMPUTE_ARGS_ONLY, false);
        self.construct(record.family(), params, &NullSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parafam_test::{AffineShift, CallSketch, GuardedFunction, MemorySink, StepFunction};

    fn registry() -> FamilyRegistry {
        let mut registry = FamilyRegistry::new();
        registry.register::<StepFunction>();
        registry.register::<AffineShift>();
        registry.register::<GuardedFunction>();
        registry.register::<CallSketch>();
        registry
    }

    #[test]
    fn constructs_by_name() {
        let sink = MemorySink::default();
        let params = Params::new().with_option("f", 0.2);
        let outcome = registry().construct("step_function", params, &sink).unwrap();
        let instance = outcome.into_instance().unwrap();

        assert!(instance.is::<StepFunction>());
        let step = instance.downcast::<StepFunction>().ok().unwrap();
        assert_eq!(step.f, 0.2);
        assert_eq!(step.record().family(), "step_function");
    }

    #[test]
    fn unknown_family_is_an_error() {
        let sink = MemorySink::default();
        let err = registry()
            .construct("no_such_family", Params::new(), &sink)
            .unwrap_err();
        assert!(matches!(err, FamilyError::UnknownFamily(_)));
    }

    #[test]
    fn dispatch_steps_match_typed_path() {
        let sink = MemorySink::default();
        let registry = registry();

        // Condition check rejects.
        let params = Params::new().with_option("f", 3.0);
        let err = registry.construct("step_function", params, &sink).unwrap_err();
        assert!(matches!(err, FamilyError::BadParameters));

        // Diagnostics flow through the injected sink.
        registry
            .construct("affine_shift", Params::new(), &sink)
            .unwrap();
        assert_eq!(
            sink.messages(),
            vec!["Conditions for extremality are NOT satisfied.".to_owned()]
        );

        // Dry run short-circuits.
        let params = Params::new()
            .with_option("f", 0.5)
            .with_option("compute_args_only", true);
        let record = registry
            .construct("step_function", params, &sink)
            .unwrap()
            .into_args()
            .unwrap();
        assert_eq!(record.family(), "step_function");

        // Introspective families bypass everything.
        let outcome = registry
            .construct("call_sketch", Params::new(), &sink)
            .unwrap();
        assert!(matches!(outcome, DynOutcome::Introspective));
    }

    #[test]
    fn delegating_builder_to_wrong_type_violates_contract() {
        let mut registry = FamilyRegistry::new();
        // A builder for StepFunction that actually builds AffineShift.
        registry.register_with::<StepFunction>(|_params| {
            Ok(Box::new(AffineShift { shift: 0.0 }) as BoxedValue)
        });

        let sink = MemorySink::default();
        let params = Params::new()
            .with_option("f", 0.5)
            .with_option("conditioncheck", false);
        let err = registry
            .construct("step_function", params, &sink)
            .unwrap_err();
        assert!(matches!(err, FamilyError::ContractViolation { .. }));
    }

    #[test]
    fn replay_skips_validation() {
        let registry = registry();
        // GuardedFunction rejects everything at check time, so a replay
        // succeeding proves the check was disabled.
        let record = ConstructionRecord::new("guarded", Vec::new(), Default::default());
        let outcome = registry.replay(&record).unwrap();
        assert!(outcome.into_instance().unwrap().is::<GuardedFunction>());
    }

    #[test]
    fn downcast_to_wrong_type_returns_instance_back() {
        let sink = MemorySink::default();
        let params = Params::new().with_option("f", 0.5);
        let instance = registry()
            .construct("step_function", params, &sink)
            .unwrap()
            .into_instance()
            .unwrap();

        let instance = instance.downcast::<AffineShift>().unwrap_err();
        assert!(instance.is::<StepFunction>());
        assert!(instance.downcast_ref::<StepFunction>().is_some());
    }
}
