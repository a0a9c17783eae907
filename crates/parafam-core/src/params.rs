//! Parameter values and parameter sets.
//!
//! A construction request carries an ordered sequence of positional
//! parameters and a key-unique map of named parameters. Both use
//! [`ParamValue`], a small self-describing value type, so the same data
//! can flow through the dispatcher, into construction records, and out
//! to a persistence layer without caring about concrete family types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single parameter value.
///
/// Untagged on the wire: booleans, integers, floats, strings, and
/// sequences map directly onto the corresponding serde data model
/// primitives.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A boolean flag.
    Bool(bool),

    /// A signed integer.
    Int(i64),

    /// A floating point number.
    Float(f64),

    /// A string.
    Str(String),

    /// A sequence of values.
    Seq(Vec<ParamValue>),
}

impl ParamValue {
    /// Returns the boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns this value as a float.
    ///
    /// Integers widen to `f64`; other kinds return `None`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(x) => Some(*x),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the sequence payload, if this is a sequence.
    pub fn as_seq(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::Seq(vs) => Some(vs),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Str(s) => write!(f, "{s:?}"),
            ParamValue::Seq(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(vs: Vec<ParamValue>) -> Self {
        ParamValue::Seq(vs)
    }
}

/// The parameter set of one construction request.
///
/// Ephemeral: consumed by a single dispatch call. The named map keeps a
/// deterministic key order so normalized records compare and serialize
/// stably.
///
/// # Example
///
/// ```
/// use parafam_core::Params;
///
/// let params = Params::new()
///     .with_arg(3)
///     .with_option("f", 0.35)
///     .with_option("periodic", true);
///
/// assert_eq!(params.int_arg(0), Some(3));
/// assert_eq!(params.float_option("f"), Some(0.35));
/// assert_eq!(params.bool_option("periodic"), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Params {
    /// Positional parameters, in call order.
    #[serde(default)]
    pub positional: Vec<ParamValue>,

    /// Named parameters; keys are unique by construction.
    #[serde(default)]
    pub named: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional parameter.
    pub fn with_arg(mut self, value: impl Into<ParamValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named parameter, replacing any previous binding of the key.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// Returns the positional parameter at `index`.
    pub fn arg(&self, index: usize) -> Option<&ParamValue> {
        self.positional.get(index)
    }

    /// Returns the named parameter bound to `key`.
    pub fn option(&self, key: &str) -> Option<&ParamValue> {
        self.named.get(key)
    }

    /// Returns the positional parameter at `index` as a boolean.
    pub fn bool_arg(&self, index: usize) -> Option<bool> {
        self.arg(index).and_then(ParamValue::as_bool)
    }

    /// Returns the positional parameter at `index` as an integer.
    pub fn int_arg(&self, index: usize) -> Option<i64> {
        self.arg(index).and_then(ParamValue::as_int)
    }

    /// Returns the positional parameter at `index` as a float.
    pub fn float_arg(&self, index: usize) -> Option<f64> {
        self.arg(index).and_then(ParamValue::as_float)
    }

    /// Returns the positional parameter at `index` as a string.
    pub fn str_arg(&self, index: usize) -> Option<&str> {
        self.arg(index).and_then(ParamValue::as_str)
    }

    /// Returns the named parameter bound to `key` as a boolean.
    pub fn bool_option(&self, key: &str) -> Option<bool> {
        self.option(key).and_then(ParamValue::as_bool)
    }

    /// Returns the named parameter bound to `key` as an integer.
    pub fn int_option(&self, key: &str) -> Option<i64> {
        self.option(key).and_then(ParamValue::as_int)
    }

    /// Returns the named parameter bound to `key` as a float.
    pub fn float_option(&self, key: &str) -> Option<f64> {
        self.option(key).and_then(ParamValue::as_float)
    }

    /// Returns the named parameter bound to `key` as a string.
    pub fn str_option(&self, key: &str) -> Option<&str> {
        self.option(key).and_then(ParamValue::as_str)
    }

    /// Returns true if the set has no positional and no named parameters.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}
