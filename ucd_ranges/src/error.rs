// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

type Cause = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Rich error type for reading and deriving Unicode properties.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the location of the failure:
/// the name of the UCD file, the 1-based line number, and the column, when
/// known. Every error is fatal for the run that produced it.
#[derive(Debug)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The UCD file (or URL) being read, if known.
    source_name: Option<String>,

    /// The 1-based line number of the offending record.
    line: Option<usize>,

    /// The zero-based column of the offending field.
    column: Option<usize>,

    /// Human readable detail, usually quoting the offending input.
    detail: String,

    /// The underlying I/O or transport failure.
    cause: Option<Cause>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The UCD file (or URL) that was being read, if known.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// The 1-based line number of the offending record, if known.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// The zero-based column of the offending field, if known.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    fn new(kind: ErrorKind, detail: String) -> Self {
        Self {
            kind,
            source_name: None,
            line: None,
            column: None,
            detail,
            cause: None,
        }
    }

    /// Attaches the name of the file being read, unless one is already set.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        if self.source_name.is_none() {
            self.source_name = Some(name.into());
        }
        self
    }

    #[must_use]
    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub(crate) fn malformed_column(name_col: usize, columns: usize, text: &str) -> Self {
        let mut err = Self::new(
            ErrorKind::MalformedColumn,
            format!("name column {name_col} exceeds total column count {columns} in `{text}`"),
        );
        err.column = Some(name_col);
        err
    }

    pub(crate) fn malformed_range(range: &str, bound: &str) -> Self {
        let mut err = Self::new(
            ErrorKind::MalformedRange,
            format!("malformed code point range `{range}` (bad bound `{bound}`)"),
        );
        err.column = Some(0);
        err
    }

    pub(crate) fn code_point_out_of_range(range: &str) -> Self {
        let mut err = Self::new(
            ErrorKind::CodePointOutOfRange,
            format!("code point range `{range}` lies outside 0..=10FFFF or is reversed"),
        );
        err.column = Some(0);
        err
    }

    pub(crate) fn unpaired_range_end(annotation: &str) -> Self {
        let mut err = Self::new(
            ErrorKind::UnpairedRangeEnd,
            format!("`{annotation}` has no preceding `First` line"),
        );
        err.column = Some(1);
        err
    }

    pub(crate) fn missing_constituent(category: &str, constituent: &str) -> Self {
        Self::new(
            ErrorKind::MissingConstituent,
            format!("constituent property `{constituent}` of `{category}` not found"),
        )
    }

    /// Wraps an I/O failure. Attach the file name with
    /// [`Error::with_source_name`].
    pub fn io(cause: std::io::Error) -> Self {
        let mut err = Self::new(ErrorKind::Io, String::from("read failed"));
        err.cause = Some(Box::new(cause));
        err
    }

    /// Reports a failed upstream fetch of `url`.
    ///
    /// `cause` is the transport error, if the request did not complete at all.
    pub fn fetch(url: impl Into<String>, detail: impl Into<String>, cause: Option<Cause>) -> Self {
        let mut err = Self::new(ErrorKind::Fetch, detail.into());
        err.source_name = Some(url.into());
        err.cause = cause;
        err
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(name) = &self.source_name {
            write!(f, "{name}:")?;
            if let Some(line) = self.line {
                write!(f, "{line}:")?;
            }
            f.write_str(" ")?;
        } else if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        if let Some(column) = self.column {
            write!(f, "column {column}: ")?;
        }
        f.write_str(&self.detail)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested name column does not exist on a record line.
    MalformedColumn,

    /// A code point bound is not a base-16 integer.
    MalformedRange,

    /// A code point bound lies above `10FFFF`, or the range is reversed.
    CodePointOutOfRange,

    /// A `<..., Last>` record in `UnicodeData.txt` had no matching `First`.
    UnpairedRangeEnd,

    /// A category referenced by an alias record is absent from the table.
    MissingConstituent,

    /// A UCD file could not be read.
    Io,

    /// A UCD file could not be fetched from upstream.
    Fetch,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
