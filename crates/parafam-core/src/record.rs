//! Construction records and the instances that carry them.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::params::{ParamValue, Params};

/// The normalized parameters of one successful (or dry-run) construction.
///
/// An immutable triple: family name, positional parameters, named domain
/// parameters. Control options are stripped before the record is created
/// and never appear here.
///
/// This is exactly the data a persistence layer must capture. Saving the
/// record instead of raw instance fields and replaying it with condition
/// checking disabled yields an instance equivalent, for all public
/// purposes, to the original.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConstructionRecord {
    family: String,
    args: Vec<ParamValue>,
    options: BTreeMap<String, ParamValue>,
}

impl ConstructionRecord {
    /// Creates a record from normalized parameters.
    pub fn new(
        family: impl Into<String>,
        args: Vec<ParamValue>,
        options: BTreeMap<String, ParamValue>,
    ) -> Self {
        Self {
            family: family.into(),
            args,
            options,
        }
    }

    /// The family this record reconstructs.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The normalized positional parameters.
    pub fn args(&self) -> &[ParamValue] {
        &self.args
    }

    /// The normalized named domain parameters.
    pub fn options(&self) -> &BTreeMap<String, ParamValue> {
        &self.options
    }

    /// Rebuilds the parameter set for a replay dispatch.
    pub fn params(&self) -> Params {
        Params {
            positional: self.args.clone(),
            named: self.options.clone(),
        }
    }
}

/// A constructed family member together with its construction record.
///
/// The record is created once by the dispatcher, owned exclusively by
/// this instance, never mutated, and dropped with it. It is deliberately
/// separate from the member's own state: only a shared reference is ever
/// handed out.
///
/// Derefs to the underlying family value for transparent use.
#[derive(Debug, Clone)]
pub struct FamilyInstance<F> {
    value: F,
    record: ConstructionRecord,
}

impl<F> FamilyInstance<F> {
    /// Attaches a record to a freshly constructed value.
    pub fn new(value: F, record: ConstructionRecord) -> Self {
        Self { value, record }
    }

    /// The underlying family value.
    pub fn value(&self) -> &F {
        &self.value
    }

    /// The construction record attached at build time.
    pub fn record(&self) -> &ConstructionRecord {
        &self.record
    }

    /// Discards the record and returns the bare value.
    pub fn into_inner(self) -> F {
        self.value
    }

    /// Splits into the value and its record.
    pub fn into_parts(self) -> (F, ConstructionRecord) {
        (self.value, self.record)
    }
}

impl<F> Deref for FamilyInstance<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.value
    }
}
