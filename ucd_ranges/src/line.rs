// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting of individual UCD record lines.

use crate::{Error, Result};

/// Separates the fields of a record.
pub const FIELD_DELIMITER: char = ';';

/// Starts a comment, either for a whole line or trailing within a field.
pub const COMMENT_MARKER: char = '#';

/// Joins the two bounds of a code point range in the first column.
pub const RANGE_SEPARATOR: &str = "..";

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// The result of parsing one line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// An empty or comment-only line.
    Skip,
    /// A data record.
    Record(Record<'a>),
}

/// An inclusive range of code points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodePointRange {
    /// The first code point in the range.
    pub low: u32,
    /// The last code point in the range.
    pub high: u32,
}

/// One data record of a UCD file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    /// The code points covered by the first column.
    pub range: CodePointRange,
    /// Whether the first column used the `..` range form.
    pub explicit_range: bool,
    /// The second column, stripped of comments and whitespace.
    pub second: &'a str,
    /// The property name taken from the requested column.
    pub name: &'a str,
}

/// Marks one end of a range spelled over two lines in `UnicodeData.txt`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeMarker {
    /// `<CJK Ideograph, First>`
    First,
    /// `<CJK Ideograph, Last>`
    Last,
}

impl Record<'_> {
    /// Returns the `First`/`Last` marker of a bracketed `UnicodeData.txt`
    /// range, if this record carries one.
    ///
    /// Only single code point records qualify; `<control>` and other
    /// bracketed names without a comma do not.
    pub fn range_marker(&self) -> Option<RangeMarker> {
        if self.explicit_range {
            return None;
        }
        let inner = self.second.strip_prefix('<')?.strip_suffix('>')?;
        let (_, tail) = inner.rsplit_once(',')?;
        match tail.trim() {
            "First" => Some(RangeMarker::First),
            "Last" => Some(RangeMarker::Last),
            _ => None,
        }
    }
}

/// Parses one line of a UCD file, taking the property name from column
/// `name_col` (zero-based).
///
/// The second column is always extracted as well, so every record must have
/// at least two columns.
pub fn parse_line(line: &str, name_col: usize) -> Result<Line<'_>> {
    let text = line.trim();
    if text.is_empty() || text.starts_with(COMMENT_MARKER) {
        return Ok(Line::Skip);
    }

    let columns: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let required = name_col.max(1);
    if columns.len() <= required {
        return Err(Error::malformed_column(required, columns.len(), text));
    }

    let range_text = field(columns[0]);
    let (range, explicit_range) = parse_range(range_text)?;

    Ok(Line::Record(Record {
        range,
        explicit_range,
        second: field(columns[1]),
        name: field(columns[name_col]),
    }))
}

/// Strips a trailing comment and surrounding whitespace from a field.
fn field(raw: &str) -> &str {
    raw.split_once(COMMENT_MARKER)
        .map_or(raw, |(value, _)| value)
        .trim()
}

fn parse_range(text: &str) -> Result<(CodePointRange, bool)> {
    let (low, high, explicit) = match text.split_once(RANGE_SEPARATOR) {
        Some((low, high)) => (parse_bound(text, low)?, parse_bound(text, high)?, true),
        None => {
            let cp = parse_bound(text, text)?;
            (cp, cp, false)
        }
    };
    if low > high || high > MAX_CODE_POINT {
        return Err(Error::code_point_out_of_range(text));
    }
    Ok((CodePointRange { low, high }, explicit))
}

fn parse_bound(range: &str, bound: &str) -> Result<u32> {
    let bound = bound.trim();
    u32::from_str_radix(bound, 16).map_err(|_| Error::malformed_range(range, bound))
}
