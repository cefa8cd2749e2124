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

//! Template scanning
//!
//! This module rewrites a template with named holes into its canonical
//! positional form in a single left-to-right pass. Each hole
//! `{Name[,alignment][:spec]}` becomes `{index[,alignment][:spec]}`,
//! where `index` counts holes in the order they appear, and `Name` is
//! recorded in an ordered name list. Holes are not deduplicated: a
//! repeated name consumes the next index and a fresh list entry.
//!
//! # Brace escaping
//!
//! Doubled braces are literals, so runs of consecutive braces have to
//! be classified before a hole boundary can be picked. The rule is
//! asymmetric and is captured by [`BracePreference`]:
//!
//! - an odd run of `{` opens a hole at the **last** brace of the run,
//!   so `{{{X}` reads as an escaped `{` followed by the hole `{X}`;
//! - an odd run of `}` closes a hole at the **first** brace of the run,
//!   so `{{{X}}}` reads as literal `{`, hole `X`, literal `}`;
//! - an even run is a fully escaped literal and the search moves on.
//!
//! # Degradation
//!
//! Scanning never fails. A template with no unescaped `{`, or with an
//! opener that never closes, keeps the remaining text verbatim in the
//! canonical form and extracts nothing from it.

/// Which brace of a consecutive run marks a hole boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BracePreference {
    /// Pick the last brace of an odd run. Used for `{`.
    LastOfRun,
    /// Pick the first brace of an odd run. Used for `}`.
    FirstOfRun,
}

/// A template rewritten to positional holes, with the extracted names.
///
/// Slot `i` of `canonical` corresponds to `names[i]`; the number of
/// holes in `canonical` always equals `names.len()`.
#[derive(Debug)]
pub(crate) struct ParsedTemplate {
    pub(crate) canonical: String,
    pub(crate) names: Vec<String>,
}

impl ParsedTemplate {
    fn literal(text: &str) -> Self {
        Self {
            canonical: text.to_string(),
            names: Vec::new(),
        }
    }
}

/// Finds the next hole boundary for `brace` in `format[start..end]`.
///
/// Returns `end` when no unescaped occurrence remains. Runs of the
/// searched brace are counted as they go: an even run is skipped as an
/// escaped literal, an odd run yields the boundary chosen by
/// `preference`.
fn find_brace(
    format: &str,
    brace: u8,
    start: usize,
    end: usize,
    preference: BracePreference,
) -> usize {
    let bytes = format.as_bytes();
    let mut brace_index = end;
    let mut run_length = 0;
    let mut scan = start;

    while scan < end {
        if run_length > 0 && bytes[scan] != brace {
            if run_length % 2 == 0 {
                // Escaped literal braces, keep looking.
                run_length = 0;
                brace_index = end;
            } else {
                // The run held an unescaped brace.
                break;
            }
        } else if bytes[scan] == brace {
            match preference {
                BracePreference::LastOfRun => brace_index = scan,
                BracePreference::FirstOfRun => {
                    if run_length == 0 {
                        brace_index = scan;
                    }
                }
            }
            run_length += 1;
        }
        scan += 1;
    }
    brace_index
}

/// Index of the first `,` or `:` between the hole's braces, or the
/// closing brace itself when the hole has no alignment or spec.
fn find_delimiter(format: &str, open: usize, close: usize) -> usize {
    format.as_bytes()[open..close]
        .iter()
        .position(|&b| b == b',' || b == b':')
        .map(|offset| open + offset)
        .unwrap_or(close)
}

/// Rewrites `raw` into canonical positional form and extracts the hole
/// names in order of first appearance.
///
/// Pure function of its input; the caller memoizes the result. Raw
/// text shorter than the smallest possible hole (`{x}`, three bytes)
/// is returned untouched without scanning, whatever it contains.
pub(crate) fn parse(raw: &str) -> ParsedTemplate {
    if raw.len() < 3 {
        return ParsedTemplate::literal(raw);
    }

    let end = raw.len();
    let mut canonical = String::with_capacity(end);
    let mut names = Vec::new();
    let mut scan = 0;

    while scan < end {
        let open = find_brace(raw, b'{', scan, end, BracePreference::LastOfRun);
        if scan == 0 && open == end {
            // No holes at all, the template is its own canonical form.
            return ParsedTemplate::literal(raw);
        }
        let close = find_brace(raw, b'}', open, end, BracePreference::FirstOfRun);
        if close == end {
            // Unterminated hole, the remainder stays literal.
            canonical.push_str(&raw[scan..]);
            scan = end;
        } else {
            let delimiter = find_delimiter(raw, open, close);
            canonical.push_str(&raw[scan..=open]);
            canonical.push_str(&names.len().to_string());
            names.push(raw[open + 1..delimiter].to_string());
            canonical.push_str(&raw[delimiter..=close]);
            scan = close + 1;
        }
    }

    ParsedTemplate { canonical, names }
}
