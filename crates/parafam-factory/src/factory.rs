//! The typed construction dispatcher.

use parafam_config::FactoryConfig;
use parafam_core::{
    ConstructionRecord, DiagnosticSink, DispatchMode, FamilyError, FamilyInstance, NullSink,
    ParametricFamily, Params, Result,
};

use crate::check::ConditionChecker;
use crate::options::{ControlOptions, COMPUTE_ARGS_ONLY, CONDITIONCHECK};
use crate::sink::TracingSink;

/// Result of one construction call.
///
/// `Constructed` and `ArgsOnly` are mutually exclusive within a call,
/// gated by the `compute_args_only` control option. `Introspective`
/// means the family's dispatch path is a deliberate no-op and nothing
/// was validated or built.
#[derive(Debug)]
pub enum Outcome<F> {
    /// A member was built; its construction record is attached.
    Constructed(FamilyInstance<F>),

    /// Dry run: the normalized parameters the final call would use,
    /// with no construction and no construction side effect.
    ArgsOnly(ConstructionRecord),

    /// The family bypasses dispatch entirely.
    Introspective,
}

impl<F> Outcome<F> {
    /// Returns the built instance, if this call constructed one.
    pub fn into_instance(self) -> Option<FamilyInstance<F>> {
        match self {
            Outcome::Constructed(instance) => Some(instance),
            _ => None,
        }
    }

    /// Returns the normalized record of a dry run.
    pub fn into_args(self) -> Option<ConstructionRecord> {
        match self {
            Outcome::ArgsOnly(record) => Some(record),
            _ => None,
        }
    }

    /// Returns true for the no-op dispatch outcome.
    pub fn is_introspective(&self) -> bool {
        matches!(self, Outcome::Introspective)
    }
}

/// The construction dispatcher for parametric families.
///
/// Every family member is built through [`Factory::construct`], which
/// strips control options, optionally validates the domain parameters,
/// supports dry-run short-circuiting, and attaches a normalized
/// construction record to each instance it builds.
///
/// Calls are independent: no caching, no instance reuse. Two calls with
/// identical parameters produce two distinct instances.
///
/// # Example
///
/// ```
/// use parafam_core::{ParametricFamily, Params, Result};
/// use parafam_factory::Factory;
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
/// let factory = Factory::new();
/// let params = Params::new().with_option("offset", 0.25);
/// let instance = factory
///     .construct::<Shift>(params)
///     .unwrap()
///     .into_instance()
///     .unwrap();
/// assert_eq!(instance.offset, 0.25);
/// assert_eq!(instance.record().family(), "shift");
/// ```
pub struct Factory<S: DiagnosticSink = TracingSink> {
    sink: S,
    defaults: ControlOptions,
    diagnostics: bool,
}

impl Factory<TracingSink> {
    /// Creates a factory with protocol defaults and tracing diagnostics.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }

    /// Creates a factory whose default control options and diagnostic
    /// emission come from configuration.
    pub fn from_config(config: &FactoryConfig) -> Self {
        Self {
            sink: TracingSink,
            defaults: ControlOptions::from(&config.construction),
            diagnostics: config.diagnostics.enabled,
        }
    }
}

impl Default for Factory<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> Factory<S> {
    /// Creates a factory reporting diagnostics through `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            defaults: ControlOptions::default(),
            diagnostics: true,
        }
    }

    /// Overrides the default control options for absent keys.
    pub fn with_defaults(mut self, defaults: ControlOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enables or disables advisory classification diagnostics.
    ///
    /// Disabling only silences the sink; verdicts still gate
    /// construction.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// The injected diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Builds a member of family `F`, or short-circuits per the control
    /// options embedded in `params`.
    ///
    /// Dispatch steps:
    /// 1. introspective families return [`Outcome::Introspective`]
    ///    immediately;
    /// 2. `conditioncheck` / `compute_args_only` are removed from the
    ///    named parameters;
    /// 3. if checking is enabled, the domain parameters are classified
    ///    and a `not_constructible` verdict aborts the call;
    /// 4. a dry run returns the normalized parameters verbatim;
    /// 5. otherwise `F::construct` runs on the domain parameters and the
    ///    record is attached to the instance.
    ///
    /// # Errors
    ///
    /// [`FamilyError::BadParameters`] from the condition check,
    /// [`FamilyError::InvalidControlOption`] from option extraction, and
    /// any error of `F::construct`, propagated unchanged.
    pub fn construct<F: ParametricFamily>(&self, params: Params) -> Result<Outcome<F>> {
        if F::MODE == DispatchMode::Introspective {
            return Ok(Outcome::Introspective);
        }
        self.dispatch::<F>(params, self.defaults)
    }

    /// Replays a construction record, re-invoking dispatch with the
    /// condition check disabled: the record already reflects previously
    /// validated parameters.
    ///
    /// # Errors
    ///
    /// [`FamilyError::RecordMismatch`] if the record names a family
    /// other than `F`; otherwise as [`Factory::construct`].
    pub fn reconstruct<F: ParametricFamily>(
        &self,
        record: &ConstructionRecord,
    ) -> Result<Outcome<F>> {
        if record.family() != F::NAME {
            return Err(FamilyError::RecordMismatch {
                expected: F::NAME.to_owned(),
                actual: record.family().to_owned(),
            });
        }
        let params = record
            .params()
            .with_option(CONDITIONCHECK, false)
            .with_option(COMPUTE_ARGS_ONLY, false);
        self.construct::<F>(params)
    }

    fn dispatch<F: ParametricFamily>(
        &self,
        mut params: Params,
        defaults: ControlOptions,
    ) -> Result<Outcome<F>> {
        let options = ControlOptions::extract_with_defaults(&mut params.named, defaults)?;

        if options.conditioncheck {
            let null = NullSink;
            let sink: &dyn DiagnosticSink = if self.diagnostics { &self.sink } else { &null };
            ConditionChecker::new(sink).check::<F>(&params)?;
        }

        if options.compute_args_only {
            tracing::debug!(family = F::NAME, "dry run, returning normalized parameters");
            return Ok(Outcome::ArgsOnly(ConstructionRecord::new(
                F::NAME,
                params.positional,
                params.named,
            )));
        }

        let value = F::construct(&params)?;
        let record = ConstructionRecord::new(F::NAME, params.positional, params.named);
        Ok(Outcome::Constructed(FamilyInstance::new(value, record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parafam_test::{
        BrittleFunction, CallSketch, FreeformFunction, GuardedFunction, MemorySink, StepFunction,
    };

    fn quiet_factory() -> Factory<MemorySink> {
        Factory::with_sink(MemorySink::default())
    }

    #[test]
    fn constructs_and_attaches_record() {
        let factory = quiet_factory();
        let params = Params::new().with_option("f", 0.25);
        let instance = factory
            .construct::<StepFunction>(params)
            .unwrap()
            .into_instance()
            .unwrap();

        assert_eq!(instance.f, 0.25);
        assert_eq!(instance.record().family(), "step_function");
        assert_eq!(instance.record().options().get("f").unwrap().as_float(), Some(0.25));
        assert!(instance.record().args().is_empty());
    }

    #[test]
    fn rejected_parameters_yield_no_instance() {
        let factory = quiet_factory();
        let params = Params::new().with_option("f", -1.0);
        let err = factory.construct::<StepFunction>(params).unwrap_err();
        assert!(matches!(err, FamilyError::BadParameters));
        assert!(factory.sink().messages().is_empty());
    }

    #[test]
    fn dry_run_never_invokes_constructor() {
        // BrittleFunction's constructor always fails, so a successful
        // dry run proves it was never reached.
        let factory = quiet_factory();
        let params = Params::new()
            .with_arg(1)
            .with_option("compute_args_only", true);
        let record = factory
            .construct::<BrittleFunction>(params)
            .unwrap()
            .into_args()
            .unwrap();

        assert_eq!(record.family(), "brittle");
        assert_eq!(record.args().len(), 1);
        assert!(!record.options().contains_key("compute_args_only"));
    }

    #[test]
    fn dry_run_is_idempotent() {
        let factory = quiet_factory();
        let params = || {
            Params::new()
                .with_option("f", 0.5)
                .with_option("compute_args_only", true)
        };
        let first = factory
            .construct::<StepFunction>(params())
            .unwrap()
            .into_args()
            .unwrap();
        let second = factory
            .construct::<StepFunction>(params())
            .unwrap()
            .into_args()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn disabled_conditioncheck_never_classifies() {
        // GuardedFunction classifies everything as not constructible, so
        // success proves classify was not consulted.
        let factory = quiet_factory();
        let params = Params::new().with_option("conditioncheck", false);
        let outcome = factory.construct::<GuardedFunction>(params).unwrap();
        assert!(outcome.into_instance().is_some());
        assert!(factory.sink().messages().is_empty());
    }

    #[test]
    fn constructor_errors_propagate_unchanged() {
        let factory = quiet_factory();
        let params = Params::new().with_option("conditioncheck", false);
        let err = factory.construct::<BrittleFunction>(params).unwrap_err();
        assert!(matches!(err, FamilyError::Domain(_)));
    }

    #[test]
    fn control_options_do_not_reach_constructor() {
        let factory = quiet_factory();
        let params = Params::new()
            .with_option("conditioncheck", true)
            .with_option("compute_args_only", false)
            .with_option("width", 2);
        let instance = factory
            .construct::<FreeformFunction>(params)
            .unwrap()
            .into_instance()
            .unwrap();

        assert!(instance.seen.option("conditioncheck").is_none());
        assert!(instance.seen.option("compute_args_only").is_none());
        assert_eq!(instance.seen.int_option("width"), Some(2));
    }

    #[test]
    fn introspective_family_bypasses_every_step() {
        // CallSketch classifies as not constructible and its constructor
        // fails; reaching either would surface an error.
        let factory = quiet_factory();
        let outcome = factory.construct::<CallSketch>(Params::new()).unwrap();
        assert!(outcome.is_introspective());
        assert!(factory.sink().messages().is_empty());
    }

    #[test]
    fn reconstruct_skips_validation_and_matches_original() {
        let factory = quiet_factory();
        let params = Params::new().with_option("f", 0.4);
        let original = factory
            .construct::<StepFunction>(params)
            .unwrap()
            .into_instance()
            .unwrap();

        let replayed = factory
            .reconstruct::<StepFunction>(original.record())
            .unwrap()
            .into_instance()
            .unwrap();

        assert_eq!(replayed.value(), original.value());
        assert_eq!(replayed.record(), original.record());
    }

    #[test]
    fn reconstruct_rejects_foreign_record() {
        let factory = quiet_factory();
        let record = ConstructionRecord::new("other_family", Vec::new(), Default::default());
        let err = factory.reconstruct::<StepFunction>(&record).unwrap_err();
        assert!(matches!(err, FamilyError::RecordMismatch { .. }));
    }

    #[test]
    fn configured_defaults_yield_to_explicit_keys() {
        let config = FactoryConfig::new().with_conditioncheck(false);
        let factory = Factory::from_config(&config);

        // Config default: no check, guarded family builds.
        let outcome = factory.construct::<GuardedFunction>(Params::new()).unwrap();
        assert!(outcome.into_instance().is_some());

        // Explicit key overrides the configured default.
        let params = Params::new().with_option("conditioncheck", true);
        let err = factory.construct::<GuardedFunction>(params).unwrap_err();
        assert!(matches!(err, FamilyError::BadParameters));
    }

    #[test]
    fn disabled_diagnostics_silence_the_sink() {
        let factory = Factory::with_sink(MemorySink::default()).with_diagnostics(false);

        let params = Params::new().with_option("f", 0.5);
        factory.construct::<StepFunction>(params).unwrap();
        assert!(factory.sink().messages().is_empty());

        // Verdicts still gate construction.
        let params = Params::new().with_option("f", 2.0);
        let err = factory.construct::<StepFunction>(params).unwrap_err();
        assert!(matches!(err, FamilyError::BadParameters));
    }
}
