//! The parametric family contract.

use crate::classification::Classification;
use crate::error::Result;
use crate::params::Params;

/// How the construction dispatcher treats a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Full dispatch: option extraction, condition check, construction,
    /// record attachment.
    Standard,

    /// No-op dispatch: the family exists only to describe construction
    /// calls. None of the dispatch steps run and no instance is ever
    /// produced.
    Introspective,
}

/// Contract implemented by every concrete parametric family.
///
/// A parametric family is a type of mathematical object fully determined
/// by its input parameters. Members are built through the construction
/// dispatcher, never by calling [`construct`](ParametricFamily::construct)
/// directly, so that condition checking, dry-run short-circuiting, and
/// record attachment apply uniformly.
///
/// # Example
///
/// ```
/// use parafam_core::{Classification, FamilyError, ParametricFamily, Params};
///
/// struct Dirac {
///     weight: f64,
/// }
///
/// impl ParametricFamily for Dirac {
///     const NAME: &'static str = "dirac";
///
///     fn classify(params: &Params) -> Option<Classification> {
///         let w = params.float_option("weight").unwrap_or(1.0);
///         if w > 0.0 {
///             Some(Classification::Constructible)
///         } else {
///             Some(Classification::NotConstructible)
///         }
///     }
///
///     fn construct(params: &Params) -> Result<Self, FamilyError> {
///         Ok(Dirac {
///             weight: params.float_option("weight").unwrap_or(1.0),
///         })
///     }
/// }
/// ```
///
/// # Reconstruction
///
/// Replaying a construction record re-runs `construct` with the recorded
/// parameters, so attributes derived from the inputs are recomputed from
/// scratch. How state that was computed during the *original* construction
/// but never supplied as a parameter should be recovered is deliberately
/// unspecified; persistence collaborators own that question.
pub trait ParametricFamily: Sized + Send + Sync + 'static {
    /// Stable family name, used in construction records and registries.
    const NAME: &'static str;

    /// Dispatch treatment for this family.
    const MODE: DispatchMode = DispatchMode::Standard;

    /// Classifies a domain parameter set.
    ///
    /// Returns `None` when the capability is not implemented for this
    /// family; the condition checker then skips the check entirely. The
    /// default body does exactly that, so classification is genuinely
    /// optional.
    fn classify(params: &Params) -> Option<Classification> {
        let _ = params;
        None
    }

    /// The underlying, non-intercepted construction routine.
    ///
    /// Receives only domain parameters: control options are stripped by
    /// the dispatcher before this runs. Errors propagate to the caller
    /// unchanged.
    fn construct(params: &Params) -> Result<Self>;
}
