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

//! Positional rendering
//!
//! Renders canonical text of the form `text {index[,alignment][:spec]}
//! text` against a slice of values. `{{` and `}}` emit literal braces.
//! A hole that references a value the caller did not supply is an
//! error; text that merely looks like a hole but is not one (a stray
//! `{`, a lone `}`, a non-numeric index) is emitted verbatim, so
//! templates that degraded to literal text upstream render unchanged.
//!
//! Alignment is a signed character width: positive right-justifies,
//! negative left-justifies, padding with spaces. The spec text after
//! `:` is handed to the value untouched.

use crate::error::{Result, TemplateError};
use crate::value::TemplateValue;

/// One structurally valid hole in the canonical text.
struct Hole<'a> {
    index: usize,
    alignment: Option<isize>,
    spec: Option<&'a str>,
    /// Byte offset just past the closing brace.
    end: usize,
}

/// Renders `format` by substituting `values` into its holes.
pub(crate) fn render(format: &str, values: &[TemplateValue]) -> Result<String> {
    let bytes = format.as_bytes();
    let mut out = String::with_capacity(format.len());
    let mut scan = 0;

    while scan < bytes.len() {
        match bytes[scan] {
            b'{' if bytes.get(scan + 1) == Some(&b'{') => {
                out.push('{');
                scan += 2;
            }
            b'}' if bytes.get(scan + 1) == Some(&b'}') => {
                out.push('}');
                scan += 2;
            }
            b'{' => match parse_hole(format, scan) {
                Some(hole) => {
                    let value = values.get(hole.index).ok_or(TemplateError::MissingValue {
                        index: hole.index,
                        provided: values.len(),
                    })?;
                    write_hole(&mut out, value, &hole);
                    scan = hole.end;
                }
                None => {
                    out.push('{');
                    scan += 1;
                }
            },
            b'}' => {
                out.push('}');
                scan += 1;
            }
            _ => {
                // Copy the literal run up to the next brace in one go.
                let run = bytes[scan..]
                    .iter()
                    .position(|&b| b == b'{' || b == b'}')
                    .unwrap_or(bytes.len() - scan);
                out.push_str(&format[scan..scan + run]);
                scan += run;
            }
        }
    }
    Ok(out)
}

/// Tries to read `{index[,alignment][:spec]}` starting at the `{` at
/// `open`. Returns `None` when the text is not a structural hole.
fn parse_hole(format: &str, open: usize) -> Option<Hole<'_>> {
    let bytes = format.as_bytes();
    let mut scan = open + 1;

    let digits_start = scan;
    while scan < bytes.len() && bytes[scan].is_ascii_digit() {
        scan += 1;
    }
    if scan == digits_start {
        return None;
    }
    let index: usize = format[digits_start..scan].parse().ok()?;

    let mut alignment = None;
    if scan < bytes.len() && bytes[scan] == b',' {
        scan += 1;
        let (parsed, after) = parse_alignment(bytes, scan)?;
        alignment = Some(parsed);
        scan = after;
    }

    let mut spec = None;
    if scan < bytes.len() && bytes[scan] == b':' {
        scan += 1;
        let spec_start = scan;
        while scan < bytes.len() && bytes[scan] != b'}' {
            scan += 1;
        }
        if scan == bytes.len() {
            return None;
        }
        spec = Some(&format[spec_start..scan]);
    }

    if bytes.get(scan) != Some(&b'}') {
        return None;
    }
    Some(Hole {
        index,
        alignment,
        spec,
        end: scan + 1,
    })
}

/// Reads a signed decimal alignment, tolerating surrounding spaces.
fn parse_alignment(bytes: &[u8], start: usize) -> Option<(isize, usize)> {
    let mut scan = start;
    while bytes.get(scan) == Some(&b' ') {
        scan += 1;
    }
    let negative = bytes.get(scan) == Some(&b'-');
    if negative {
        scan += 1;
    }
    let digits_start = scan;
    let mut width: isize = 0;
    while let Some(byte) = bytes.get(scan) {
        if !byte.is_ascii_digit() {
            break;
        }
        width = width.checked_mul(10)?.checked_add((byte - b'0') as isize)?;
        scan += 1;
    }
    if scan == digits_start {
        return None;
    }
    while bytes.get(scan) == Some(&b' ') {
        scan += 1;
    }
    Some((if negative { -width } else { width }, scan))
}

/// Renders one value into `out`, applying the hole's spec and padding.
fn write_hole(out: &mut String, value: &TemplateValue, hole: &Hole<'_>) {
    let rendered = match hole.spec {
        Some(spec) => value.format_with(spec),
        None => value.to_string(),
    };
    let Some(alignment) = hole.alignment else {
        out.push_str(&rendered);
        return;
    };
    let width = alignment.unsigned_abs();
    let length = rendered.chars().count();
    if length >= width {
        out.push_str(&rendered);
        return;
    }
    let padding = width - length;
    if alignment < 0 {
        out.push_str(&rendered);
        out.extend(std::iter::repeat_n(' ', padding));
    } else {
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(&rendered);
    }
}
