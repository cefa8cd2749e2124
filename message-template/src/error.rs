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

//! Error handling
//!
//! Only caller mistakes are errors. Malformed template text never
//! appears here: the scanner degrades bad brace syntax to literal
//! output instead of failing.

use thiserror::Error;

/// Failures surfaced by rendering and pair lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Rendering referenced a hole index with no supplied value.
    #[error("no value for hole {index}, {provided} values were supplied")]
    MissingValue { index: usize, provided: usize },

    /// A name/value pair was requested past the synthetic template
    /// entry.
    #[error("value index {index} out of range for a template with {count} holes")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
