// MIT License
//
// Copyright (c) 2025 Paul Tuckey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Argument values
//!
//! [`TemplateValue`] is the value side of an extracted name/value pair
//! and the argument type accepted by rendering. Display output uses
//! one fixed convention regardless of the process locale: integers and
//! floats print the way Rust prints them, missing values print as
//! `(null)`, and sequences print as their elements joined with `", "`.
//! Strings are strings; they are never treated as sequences of
//! characters.

use std::fmt::{self, Display};

use serde::Serialize;

/// Display text substituted for a missing value.
pub(crate) const NULL_MARKER: &str = "(null)";

/// A single argument value supplied alongside a template.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    /// An absent value, rendered as `(null)`.
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    /// A collection, rendered as its elements joined with `", "`.
    Seq(Vec<TemplateValue>),
}

impl TemplateValue {
    /// Collapses values that have no single display form, ahead of
    /// positional rendering.
    ///
    /// `Null` becomes the `(null)` marker text and a sequence becomes
    /// one joined string, missing elements included as `(null)`.
    /// Everything else passes through unchanged, so numeric values
    /// keep their numeric formatting behaviour.
    pub(crate) fn flattened(&self) -> TemplateValue {
        match self {
            TemplateValue::Null => TemplateValue::Str(NULL_MARKER.to_string()),
            TemplateValue::Seq(_) => TemplateValue::Str(self.to_string()),
            other => other.clone(),
        }
    }

    /// Renders the value under a format specifier.
    ///
    /// The specifier set is small and invariant: `D`/`d` zero-padded
    /// decimal, `X`/`x` zero-padded hex, `F`/`f`/`N`/`n` fixed-point
    /// with two decimals unless told otherwise. An unknown specifier,
    /// or one applied to a value it cannot shape, falls back to the
    /// plain display form.
    pub(crate) fn format_with(&self, spec: &str) -> String {
        let mut chars = spec.chars();
        let Some(kind) = chars.next() else {
            return self.to_string();
        };
        let digits: Option<usize> = chars.as_str().parse().ok();
        let width = digits.unwrap_or(0);
        let precision = digits.unwrap_or(2);
        match kind {
            'D' | 'd' => match *self {
                TemplateValue::Int(value) => padded_decimal(value, width),
                TemplateValue::Uint(value) => format!("{value:0width$}"),
                _ => self.to_string(),
            },
            'X' => match *self {
                TemplateValue::Int(value) => format!("{value:0width$X}"),
                TemplateValue::Uint(value) => format!("{value:0width$X}"),
                _ => self.to_string(),
            },
            'x' => match *self {
                TemplateValue::Int(value) => format!("{value:0width$x}"),
                TemplateValue::Uint(value) => format!("{value:0width$x}"),
                _ => self.to_string(),
            },
            'F' | 'f' | 'N' | 'n' => match *self {
                TemplateValue::Int(value) => format!("{:.precision$}", value as f64),
                TemplateValue::Uint(value) => format!("{:.precision$}", value as f64),
                TemplateValue::Float(value) => format!("{value:.precision$}"),
                _ => self.to_string(),
            },
            _ => self.to_string(),
        }
    }
}

/// Zero-pads to `digits`, keeping the sign outside the padding.
fn padded_decimal(value: i64, digits: usize) -> String {
    let width = if value < 0 { digits + 1 } else { digits };
    format!("{value:0width$}")
}

impl Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Null => f.write_str(NULL_MARKER),
            TemplateValue::Bool(value) => write!(f, "{value}"),
            TemplateValue::Int(value) => write!(f, "{value}"),
            TemplateValue::Uint(value) => write!(f, "{value}"),
            TemplateValue::Float(value) => write!(f, "{value}"),
            TemplateValue::Str(value) => f.write_str(value),
            TemplateValue::Seq(items) => {
                let mut glue = "";
                for item in items {
                    f.write_str(glue)?;
                    write!(f, "{item}")?;
                    glue = ", ";
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Bool(value)
    }
}

impl From<i32> for TemplateValue {
    fn from(value: i32) -> Self {
        TemplateValue::Int(value.into())
    }
}

impl From<i64> for TemplateValue {
    fn from(value: i64) -> Self {
        TemplateValue::Int(value)
    }
}

impl From<u32> for TemplateValue {
    fn from(value: u32) -> Self {
        TemplateValue::Uint(value.into())
    }
}

impl From<u64> for TemplateValue {
    fn from(value: u64) -> Self {
        TemplateValue::Uint(value)
    }
}

impl From<usize> for TemplateValue {
    fn from(value: usize) -> Self {
        TemplateValue::Uint(value as u64)
    }
}

impl From<f32> for TemplateValue {
    fn from(value: f32) -> Self {
        TemplateValue::Float(value.into())
    }
}

impl From<f64> for TemplateValue {
    fn from(value: f64) -> Self {
        TemplateValue::Float(value)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Str(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Str(value)
    }
}

impl<T: Into<TemplateValue>> From<Option<T>> for TemplateValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => TemplateValue::Null,
        }
    }
}

impl<T: Into<TemplateValue>> From<Vec<T>> for TemplateValue {
    fn from(items: Vec<T>) -> Self {
        TemplateValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

/// Builds a `Vec<TemplateValue>` from mixed literals.
///
/// ```
/// use message_template::{values, TemplateValue};
///
/// let args = values!["alice", 3, 2.5];
/// assert_eq!(args[1], TemplateValue::Int(3));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::TemplateValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        <[_]>::into_vec(::std::boxed::Box::new([
            $($crate::TemplateValue::from($value)),+
        ]))
    };
}

#[cfg(test)]
mod tests {
    use super::TemplateValue;

    #[test]
    fn display_is_invariant() {
        assert_eq!(TemplateValue::Int(-3).to_string(), "-3");
        assert_eq!(TemplateValue::Float(1234.5).to_string(), "1234.5");
        assert_eq!(TemplateValue::Bool(true).to_string(), "true");
        assert_eq!(TemplateValue::Str("x".into()).to_string(), "x");
    }

    #[test]
    fn null_displays_as_marker() {
        assert_eq!(TemplateValue::Null.to_string(), "(null)");
    }

    #[test]
    fn sequences_join_with_comma_space() {
        let seq = TemplateValue::from(vec![1, 2, 3]);
        assert_eq!(seq.to_string(), "1, 2, 3");
    }

    #[test]
    fn null_elements_join_as_marker() {
        let seq = TemplateValue::Seq(vec![
            TemplateValue::Int(1),
            TemplateValue::Null,
            TemplateValue::Int(3),
        ]);
        assert_eq!(seq.to_string(), "1, (null), 3");
    }

    #[test]
    fn flattening_collapses_null_and_sequences_only() {
        assert_eq!(
            TemplateValue::Null.flattened(),
            TemplateValue::Str("(null)".into())
        );
        assert_eq!(
            TemplateValue::from(vec![1, 2]).flattened(),
            TemplateValue::Str("1, 2".into())
        );
        assert_eq!(TemplateValue::Int(7).flattened(), TemplateValue::Int(7));
        assert_eq!(
            TemplateValue::Str("abc".into()).flattened(),
            TemplateValue::Str("abc".into())
        );
    }

    #[test]
    fn decimal_spec_zero_pads() {
        assert_eq!(TemplateValue::Int(7).format_with("D2"), "07");
        assert_eq!(TemplateValue::Int(-7).format_with("D2"), "-07");
        assert_eq!(TemplateValue::Uint(123).format_with("D2"), "123");
        assert_eq!(TemplateValue::Int(7).format_with("D"), "7");
    }

    #[test]
    fn hex_spec_pads_and_cases() {
        assert_eq!(TemplateValue::Uint(255).format_with("X"), "FF");
        assert_eq!(TemplateValue::Uint(255).format_with("x4"), "00ff");
    }

    #[test]
    fn fixed_point_defaults_to_two_decimals() {
        assert_eq!(TemplateValue::Float(2.5).format_with("F"), "2.50");
        assert_eq!(TemplateValue::Float(2.5).format_with("F1"), "2.5");
        assert_eq!(TemplateValue::Int(3).format_with("N1"), "3.0");
    }

    #[test]
    fn unknown_spec_falls_back_to_display() {
        assert_eq!(TemplateValue::Int(42).format_with("Q9"), "42");
        assert_eq!(TemplateValue::Str("hi".into()).format_with("D2"), "hi");
        assert_eq!(TemplateValue::Int(42).format_with(""), "42");
    }

    #[test]
    fn option_conversion_maps_none_to_null() {
        assert_eq!(TemplateValue::from(None::<i32>), TemplateValue::Null);
        assert_eq!(TemplateValue::from(Some(5)), TemplateValue::Int(5));
    }

    #[test]
    fn values_macro_builds_mixed_vectors() {
        let args = crate::values!["a", 1, 2.5, true];
        assert_eq!(
            args,
            vec![
                TemplateValue::Str("a".into()),
                TemplateValue::Int(1),
                TemplateValue::Float(2.5),
                TemplateValue::Bool(true),
            ]
        );
        assert!(crate::values!().is_empty());
    }

    #[test]
    fn serializes_untagged() {
        let seq = TemplateValue::Seq(vec![TemplateValue::Int(1), TemplateValue::Null]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "[1,null]");
    }
}
