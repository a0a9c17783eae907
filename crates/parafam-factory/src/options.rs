//! Control option extraction.
//!
//! Two named parameters steer the dispatcher rather than the family:
//! `conditioncheck` and `compute_args_only`. They are removed from the
//! named parameter map before anything else looks at it, so a family's
//! `classify` and `construct` routines only ever see domain parameters.

use std::collections::BTreeMap;

use parafam_config::ConstructionDefaults;
use parafam_core::{FamilyError, ParamValue, Result};

/// Named parameter key enabling/disabling the condition check.
pub const CONDITIONCHECK: &str = "conditioncheck";

/// Named parameter key switching a call to dry-run mode.
pub const COMPUTE_ARGS_ONLY: &str = "compute_args_only";

/// The control options of one construction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlOptions {
    /// Whether domain parameters are classified before construction.
    pub conditioncheck: bool,

    /// Whether the call short-circuits to normalized parameters.
    pub compute_args_only: bool,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            conditioncheck: true,
            compute_args_only: false,
        }
    }
}

impl ControlOptions {
    /// Removes the control keys from `named`, using the protocol defaults
    /// for absent keys.
    pub fn extract(named: &mut BTreeMap<String, ParamValue>) -> Result<Self> {
        Self::extract_with_defaults(named, Self::default())
    }

    /// Removes the control keys from `named`, falling back to `defaults`
    /// for absent keys. Explicit keys always win.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyError::InvalidControlOption`] if a control key is
    /// bound to a non-boolean value.
    pub fn extract_with_defaults(
        named: &mut BTreeMap<String, ParamValue>,
        defaults: Self,
    ) -> Result<Self> {
        let mut options = defaults;
        if let Some(value) = named.remove(CONDITIONCHECK) {
            options.conditioncheck = require_bool(CONDITIONCHECK, &value)?;
        }
        if let Some(value) = named.remove(COMPUTE_ARGS_ONLY) {
            options.compute_args_only = require_bool(COMPUTE_ARGS_ONLY, &value)?;
        }
        Ok(options)
    }
}

impl From<&ConstructionDefaults> for ControlOptions {
    fn from(defaults: &ConstructionDefaults) -> Self {
        Self {
            conditioncheck: defaults.conditioncheck,
            compute_args_only: defaults.compute_args_only,
        }
    }
}

fn require_bool(key: &str, value: &ParamValue) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| FamilyError::InvalidControlOption {
            key: key.to_owned(),
            value: value.to_string(),
        })
}
