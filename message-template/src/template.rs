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

use std::fmt::{self, Display};
use std::sync::OnceLock;

use crate::error::{Result, TemplateError};
use crate::positional;
use crate::scanner::{self, ParsedTemplate};
use crate::value::TemplateValue;

/// Name of the synthetic trailing pair carrying the unparsed template
/// text, appended by [`MessageTemplate::get_values`] and returned by
/// [`MessageTemplate::get_value`] for the index one past the last
/// hole.
pub const ORIGINAL_FORMAT_KEY: &str = "{OriginalFormat}";

/// A message template with named holes, such as
/// `"User {UserId} logged in from {IpAddress}"`.
///
/// Construction stores the text untouched. The first call to any
/// operation that needs the parsed form runs the scan exactly once and
/// caches it for the life of the instance; concurrent first calls
/// observe the one published result.
///
/// Two views are derived from the same parse: [`format`] renders a
/// display string, and [`get_values`] pairs each hole name with its
/// value for backends that index log events by field name.
///
/// [`format`]: MessageTemplate::format
/// [`get_values`]: MessageTemplate::get_values
///
/// # Examples
///
/// ```
/// use message_template::{values, MessageTemplate};
///
/// let template = MessageTemplate::new("User {UserId} logged in");
/// let args = values![42];
///
/// assert_eq!(template.value_names(), ["UserId"]);
/// assert_eq!(template.format(&args).unwrap(), "User 42 logged in");
/// ```
#[derive(Debug)]
pub struct MessageTemplate {
    text: String,
    parsed: OnceLock<ParsedTemplate>,
}

impl MessageTemplate {
    /// Wraps a raw template. The text is not validated or scanned
    /// here; parsing happens on first use.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parsed: OnceLock::new(),
        }
    }

    /// The raw template text as supplied at construction.
    pub fn original_format(&self) -> &str {
        &self.text
    }

    fn parsed(&self) -> &ParsedTemplate {
        self.parsed.get_or_init(|| scanner::parse(&self.text))
    }

    /// The hole names in order of appearance, one entry per hole.
    /// Repeated names appear once per occurrence.
    pub fn value_names(&self) -> &[String] {
        &self.parsed().names
    }

    /// Renders the template against `values`, hole `i` taking
    /// `values[i]`.
    ///
    /// Missing values render as `(null)` and collections render as
    /// their elements joined with `", "` before positional formatting
    /// runs. Referencing a hole index with no supplied value fails
    /// with [`TemplateError::MissingValue`].
    pub fn format(&self, values: &[TemplateValue]) -> Result<String> {
        let flattened: Vec<TemplateValue> =
            values.iter().map(TemplateValue::flattened).collect();
        positional::render(&self.parsed().canonical, &flattened)
    }

    /// Returns the name/value pair at `index`.
    ///
    /// `index` may be anywhere in `0..=names`: every position below
    /// the hole count pairs `names[index]` with `values[index]`, and
    /// the position exactly one past it returns the synthetic
    /// ([`ORIGINAL_FORMAT_KEY`], original text) pair. Anything larger
    /// fails with [`TemplateError::IndexOutOfRange`].
    ///
    /// # Panics
    ///
    /// Panics if `index` names a hole but `values` is shorter than the
    /// hole count; supplying one value per hole is the caller's
    /// contract.
    pub fn get_value(&self, values: &[TemplateValue], index: usize) -> Result<(&str, TemplateValue)> {
        let names = &self.parsed().names;
        if index > names.len() {
            return Err(TemplateError::IndexOutOfRange {
                index,
                count: names.len(),
            });
        }
        if index < names.len() {
            return Ok((&names[index], values[index].clone()));
        }
        Ok((ORIGINAL_FORMAT_KEY, TemplateValue::from(self.text.as_str())))
    }

    /// Returns every name/value pair, with the synthetic
    /// ([`ORIGINAL_FORMAT_KEY`], original text) pair in the final
    /// slot.
    ///
    /// The output always has `values.len() + 1` entries. When more
    /// values are supplied than the template has holes, the slots
    /// between the last hole and the synthetic tail are left at the
    /// default empty pair; consumers keying off names should skip
    /// empty-named entries.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than the hole count.
    pub fn get_values<'a>(&'a self, values: &[TemplateValue]) -> Vec<(&'a str, TemplateValue)> {
        let names = &self.parsed().names;
        let mut pairs = vec![("", TemplateValue::Null); values.len() + 1];
        for (index, name) in names.iter().enumerate() {
            pairs[index] = (name.as_str(), values[index].clone());
        }
        let last = pairs.len() - 1;
        pairs[last] = (ORIGINAL_FORMAT_KEY, TemplateValue::from(self.text.as_str()));
        pairs
    }
}

impl Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{MessageTemplate, ORIGINAL_FORMAT_KEY};
    use crate::error::TemplateError;
    use crate::value::TemplateValue;
    use crate::values;

    #[test]
    fn construction_does_not_scan() {
        let template = MessageTemplate::new("Hello {Name");
        assert_eq!(template.original_format(), "Hello {Name");
    }

    #[test]
    fn value_names_are_cached_across_calls() {
        let template = MessageTemplate::new("{A}{B}");
        let first = template.value_names().as_ptr();
        let second = template.value_names().as_ptr();
        assert!(std::ptr::eq(first, second));
        assert_eq!(template.value_names(), ["A", "B"]);
    }

    #[test]
    fn concurrent_first_use_parses_once() {
        let template = MessageTemplate::new("{A} {B} {C}");
        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    assert_eq!(template.value_names(), ["A", "B", "C"]);
                });
            }
        });
        assert_eq!(template.format(&values![1, 2, 3]).unwrap(), "1 2 3");
    }

    #[test]
    fn get_value_returns_aligned_pairs() {
        let template = MessageTemplate::new("{UserId} from {IpAddress}");
        let args = values![42, "10.0.0.17"];
        let (name, value) = template.get_value(&args, 0).unwrap();
        assert_eq!((name, value), ("UserId", TemplateValue::Int(42)));
        let (name, value) = template.get_value(&args, 1).unwrap();
        assert_eq!(
            (name, value),
            ("IpAddress", TemplateValue::Str("10.0.0.17".into()))
        );
    }

    #[test]
    fn one_past_the_holes_is_the_original_template() {
        let template = MessageTemplate::new("{A} and {B}");
        let (name, value) = template.get_value(&values![], 2).unwrap();
        assert_eq!(name, ORIGINAL_FORMAT_KEY);
        assert_eq!(value, TemplateValue::Str("{A} and {B}".into()));
    }

    #[test]
    fn past_the_synthetic_entry_is_out_of_range() {
        let template = MessageTemplate::new("{A} and {B}");
        let err = template.get_value(&values![1, 2], 3).unwrap_err();
        assert_eq!(err, TemplateError::IndexOutOfRange { index: 3, count: 2 });
    }

    #[test]
    fn get_values_zips_and_appends_the_original() {
        let template = MessageTemplate::new("{A} and {B}");
        let pairs = template.get_values(&values![1, 2]);
        assert_eq!(
            pairs,
            vec![
                ("A", TemplateValue::Int(1)),
                ("B", TemplateValue::Int(2)),
                (ORIGINAL_FORMAT_KEY, TemplateValue::Str("{A} and {B}".into())),
            ]
        );
    }

    #[test]
    fn surplus_values_leave_default_slots_before_the_tail() {
        let template = MessageTemplate::new("{A}");
        let pairs = template.get_values(&values![1, 2, 3]);
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], ("A", TemplateValue::Int(1)));
        assert_eq!(pairs[1], ("", TemplateValue::Null));
        assert_eq!(pairs[2], ("", TemplateValue::Null));
        assert_eq!(
            pairs[3],
            (ORIGINAL_FORMAT_KEY, TemplateValue::Str("{A}".into()))
        );
    }

    #[test]
    fn literal_template_yields_only_the_synthetic_pair() {
        let template = MessageTemplate::new("plain");
        assert!(template.value_names().is_empty());
        let pairs = template.get_values(&values![]);
        assert_eq!(
            pairs,
            vec![(ORIGINAL_FORMAT_KEY, TemplateValue::Str("plain".into()))]
        );
    }

    #[test]
    fn display_shows_the_original_text() {
        let template = MessageTemplate::new("{A}!");
        assert_eq!(template.to_string(), "{A}!");
    }
}
