//! Fixture families covering every dispatch path.

use parafam_core::{
    Classification, DispatchMode, FamilyError, ParametricFamily, Params, Result,
};

/// Single-breakpoint step function on [0, 1].
///
/// Extreme for `f` in (0, 1), not constructible otherwise. The slopes
/// are computed during construction, not supplied as parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StepFunction {
    pub f: f64,
    pub left_slope: f64,
    pub right_slope: f64,
}

impl ParametricFamily for StepFunction {
    const NAME: &'static str = "step_function";

    fn classify(params: &Params) -> Option<Classification> {
        let f = params.float_option("f").unwrap_or(0.5);
        if f > 0.0 && f < 1.0 {
            Some(Classification::Extreme)
        } else {
            Some(Classification::NotConstructible)
        }
    }

    fn construct(params: &Params) -> Result<Self> {
        let f = params.float_option("f").unwrap_or(0.5);
        Ok(Self {
            f,
            left_slope: 1.0 / f,
            right_slope: 1.0 / (f - 1.0),
        })
    }
}

/// Translation family; always merely constructible.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineShift {
    pub shift: f64,
}

impl ParametricFamily for AffineShift {
    const NAME: &'static str = "affine_shift";

    fn classify(params: &Params) -> Option<Classification> {
        let _ = params;
        Some(Classification::Constructible)
    }

    fn construct(params: &Params) -> Result<Self> {
        Ok(Self {
            shift: params.float_option("shift").unwrap_or(0.0),
        })
    }
}

/// Family whose every parameter set classifies as minimal.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricKink {
    pub apex: f64,
}

impl ParametricFamily for SymmetricKink {
    const NAME: &'static str = "symmetric_kink";

    fn classify(params: &Params) -> Option<Classification> {
        let _ = params;
        Some(Classification::Minimal)
    }

    fn construct(params: &Params) -> Result<Self> {
        Ok(Self {
            apex: params.float_option("apex").unwrap_or(0.5),
        })
    }
}

/// Family without the classification capability; its constructor keeps
/// a copy of the parameter set it was handed, so tests can assert what
/// actually reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeformFunction {
    pub seen: Params,
}

impl ParametricFamily for FreeformFunction {
    const NAME: &'static str = "freeform";

    fn construct(params: &Params) -> Result<Self> {
        Ok(Self {
            seen: params.clone(),
        })
    }
}

/// Family whose classification rejects every parameter set. A successful
/// construction therefore proves the check was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardedFunction;

impl ParametricFamily for GuardedFunction {
    const NAME: &'static str = "guarded";

    fn classify(params: &Params) -> Option<Classification> {
        let _ = params;
        Some(Classification::NotConstructible)
    }

    fn construct(_params: &Params) -> Result<Self> {
        Ok(Self)
    }
}

/// Family that classifies fine but whose constructor always fails. A
/// successful dry run therefore proves the constructor was never
/// reached.
#[derive(Debug, Clone, PartialEq)]
pub struct BrittleFunction;

impl ParametricFamily for BrittleFunction {
    const NAME: &'static str = "brittle";

    fn classify(params: &Params) -> Option<Classification> {
        let _ = params;
        Some(Classification::Extreme)
    }

    fn construct(_params: &Params) -> Result<Self> {
        Err(FamilyError::Domain(
            "synthetic constructor failure".to_owned(),
        ))
    }
}

/// Introspection-only family: both capabilities are poisoned, so any
/// dispatch step that runs surfaces as a test failure.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSketch;

impl ParametricFamily for CallSketch {
    const NAME: &'static str = "call_sketch";
    const MODE: DispatchMode = DispatchMode::Introspective;

    fn classify(params: &Params) -> Option<Classification> {
        let _ = params;
        Some(Classification::NotConstructible)
    }

    fn construct(_params: &Params) -> Result<Self> {
        Err(FamilyError::Domain(
            "introspection-only family was constructed".to_owned(),
        ))
    }
}
