//! Key/value blocks.
//!
//! [`format_named_values`] renders a list of [`NamedValue`]s as a block of
//! `name: value` rows whose keys are right-aligned against the colon:
//!
//! ```text
//!        Name: web
//!   Instances: 3
//!     Healthy: true
//!
//! ```
//!
//! Rows holding an empty string are skipped. The block always ends with one
//! blank line.

use std::fmt;
use unicode_width::UnicodeWidthStr;

/// A value shown in a [`NamedValue`] row.
///
/// The variant picks the formatting rule; callers choose it when building
/// the row, usually through one of the `From` conversions.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Signed integer, rendered in decimal.
    Int(i64),
    /// Unsigned integer, rendered in decimal.
    Uint(u64),
    /// Float, rendered fixed-point with six decimals.
    Float(f64),
    /// Rendered as `true` or `false`.
    Bool(bool),
    /// Rendered verbatim. Empty strings drop the whole row.
    Str(String),
    /// Any other printable value, captured through its `Display` output.
    Other(String),
}

impl Value {
    /// Captures any `Display` value.
    pub fn other(value: impl fmt::Display) -> Self {
        Value::Other(value.to_string())
    }

    fn is_blank(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:.6}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Str(v) | Value::Other(v) => f.write_str(v),
        }
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64);
value_from!(Uint as u64: u8, u16, u32, u64);
value_from!(Float as f64: f32, f64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Uint(v as u64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// One row of a key/value block.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedValue {
    /// Row label, shown before the colon.
    pub name: String,
    /// Row value.
    pub value: Value,
}

impl NamedValue {
    /// Builds a row from anything convertible into a [`Value`].
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Renders `rows` as a right-aligned key/value block followed by a blank line.
pub(crate) fn format_named_values(rows: &[NamedValue]) -> String {
    let cells: Vec<(String, String)> = rows
        .iter()
        .filter(|row| !row.value.is_blank())
        .map(|row| (format!("  {}: ", row.name), row.value.to_string()))
        .collect();

    let width = cells
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut out = String::new();
    for (key, value) in &cells {
        let pad = width - key.width();
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(key);
        out.push_str(value);
        out.push('\n');
    }
    out.push('\n');
    out
}
