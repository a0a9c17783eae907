//! Classification-gated validation.

use parafam_core::{Classification, DiagnosticSink, FamilyError, ParametricFamily, Params, Result};

/// Decides whether construction may proceed for a parameter set.
///
/// Strict three-way outcome:
/// - capability absent: skip, no diagnostic;
/// - `not_constructible`: fail, construction must not proceed;
/// - anything else: permit, with an advisory diagnostic saying whether
///   the stronger extremality property is established.
pub struct ConditionChecker<'a> {
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ConditionChecker<'a> {
    /// Creates a checker reporting through `sink`.
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Classifies `params` for family `F` and applies the verdict.
    pub fn check<F: ParametricFamily>(&self, params: &Params) -> Result<()> {
        self.apply(F::classify(params))
    }

    /// Applies an already-computed verdict.
    ///
    /// Split out so the dynamic construction path can reuse the exact
    /// same outcome logic with a stored classification function.
    pub fn apply(&self, classification: Option<Classification>) -> Result<()> {
        match classification {
            None => Ok(()),
            Some(Classification::NotConstructible) => Err(FamilyError::BadParameters),
            Some(Classification::Constructible) => {
                self.sink
                    .info("Conditions for extremality are NOT satisfied.");
                Ok(())
            }
            Some(_) => {
                self.sink.info("Conditions for extremality are satisfied.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parafam_test::{AffineShift, FreeformFunction, MemorySink, StepFunction, SymmetricKink};

    #[test]
    fn unsupported_capability_skips_silently() {
        let sink = MemorySink::default();
        let checker = ConditionChecker::new(&sink);
        checker
            .check::<FreeformFunction>(&Params::new())
            .unwrap();
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn not_constructible_fails_without_diagnostic() {
        let sink = MemorySink::default();
        let checker = ConditionChecker::new(&sink);
        let params = Params::new().with_option("f", 1.5);
        let err = checker.check::<StepFunction>(&params).unwrap_err();
        assert!(matches!(err, FamilyError::BadParameters));
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn constructible_warns_extremality_not_established() {
        let sink = MemorySink::default();
        let checker = ConditionChecker::new(&sink);
        checker.check::<AffineShift>(&Params::new()).unwrap();
        assert_eq!(
            sink.messages(),
            vec!["Conditions for extremality are NOT satisfied.".to_owned()]
        );
    }

    #[test]
    fn extreme_reports_conditions_satisfied() {
        let sink = MemorySink::default();
        let checker = ConditionChecker::new(&sink);
        let params = Params::new().with_option("f", 0.3);
        checker.check::<StepFunction>(&params).unwrap();
        assert_eq!(
            sink.messages(),
            vec!["Conditions for extremality are satisfied.".to_owned()]
        );
    }

    #[test]
    fn minimal_reports_conditions_satisfied() {
        let sink = MemorySink::default();
        let checker = ConditionChecker::new(&sink);
        checker.check::<SymmetricKink>(&Params::new()).unwrap();
        assert_eq!(
            sink.messages(),
            vec!["Conditions for extremality are satisfied.".to_owned()]
        );
    }
}
