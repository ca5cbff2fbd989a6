// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compression of code point sets into stride-aware range tables.
//!
//! The layout mirrors the range tables found in most Unicode-aware standard
//! libraries: a list of 16-bit intervals for the Basic Multilingual Plane, a
//! list of 32-bit intervals for everything above it, and a count of leading
//! 16-bit intervals that lie within Latin-1 so that lookups of common
//! characters can finish without searching.

use crate::Property;

/// The largest Latin-1 code point.
pub const MAX_LATIN1: u32 = 0xFF;

/// The largest code point stored in a [`Range16`].
pub const MAX_NARROW: u32 = 0xFFFF;

/// An interval of code points up to `FFFF`: `lo, lo + stride, ..., hi`.
///
/// `stride` is at least 1; an interval with a zero stride matches nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range16 {
    /// The first code point.
    pub lo: u16,
    /// The last code point.
    pub hi: u16,
    /// The gap between members; `1` for a contiguous run.
    pub stride: u16,
}

/// An interval of code points above `FFFF`: `lo, lo + stride, ..., hi`.
///
/// `stride` is at least 1; an interval with a zero stride matches nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range32 {
    /// The first code point.
    pub lo: u32,
    /// The last code point.
    pub hi: u32,
    /// The gap between members; `1` for a contiguous run.
    pub stride: u32,
}

/// An owned range table, as produced by [`Compressor`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RangeTable {
    /// Intervals below `10000`, ascending.
    pub r16: Vec<Range16>,
    /// Intervals from `10000` upwards, ascending.
    pub r32: Vec<Range32>,
    /// How many leading entries of `r16` end within Latin-1.
    pub latin_offset: usize,
}

/// A borrowed range table. Generated code declares these as constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RangeTableRef<'a> {
    /// Intervals below `10000`, ascending.
    pub r16: &'a [Range16],
    /// Intervals from `10000` upwards, ascending.
    pub r32: &'a [Range32],
    /// How many leading entries of `r16` end within Latin-1.
    pub latin_offset: usize,
}

impl RangeTable {
    /// Borrows this table.
    pub fn as_ref(&self) -> RangeTableRef<'_> {
        RangeTableRef {
            r16: &self.r16,
            r32: &self.r32,
            latin_offset: self.latin_offset,
        }
    }

    /// Whether `cp` is in the table.
    pub fn contains(&self, cp: u32) -> bool {
        self.as_ref().contains(cp)
    }

    /// Whether the table holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.r16.is_empty() && self.r32.is_empty()
    }
}

impl<'a> RangeTableRef<'a> {
    /// Whether `cp` is in the table.
    pub fn contains(&self, cp: u32) -> bool {
        if cp <= MAX_LATIN1 {
            // No interval starting in Latin-1 extends past it.
            let latin = &self.r16[..self.latin_offset.min(self.r16.len())];
            return latin
                .iter()
                .any(|r| is_member(cp, r.lo.into(), r.hi.into(), r.stride.into()));
        }
        if cp <= MAX_NARROW {
            let rest = &self.r16[self.latin_offset.min(self.r16.len())..];
            let index = rest.partition_point(|r| u32::from(r.hi) < cp);
            return rest
                .get(index)
                .is_some_and(|r| is_member(cp, r.lo.into(), r.hi.into(), r.stride.into()));
        }
        let index = self.r32.partition_point(|r| r.hi < cp);
        self.r32
            .get(index)
            .is_some_and(|r| is_member(cp, r.lo, r.hi, r.stride))
    }

    /// Expands the table back into its code points, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        let narrow = self
            .r16
            .iter()
            .flat_map(|r| members(r.lo.into(), r.hi.into(), r.stride.into()));
        let wide = self.r32.iter().flat_map(|r| members(r.lo, r.hi, r.stride));
        narrow.chain(wide)
    }
}

fn is_member(cp: u32, lo: u32, hi: u32, stride: u32) -> bool {
    lo <= cp && cp <= hi && stride != 0 && (cp - lo) % stride == 0
}

fn members(lo: u32, hi: u32, stride: u32) -> impl Iterator<Item = u32> {
    let range = if stride == 0 { 1..=0 } else { lo..=hi };
    range.step_by(stride.max(1) as usize)
}

/// Turns code point sets into [`RangeTable`]s.
#[derive(Copy, Clone, Debug)]
pub struct Compressor {
    use_stride: bool,
}

impl Default for Compressor {
    fn default() -> Self {
        Self { use_stride: true }
    }
}

impl Compressor {
    /// Creates a compressor. With `use_stride` off every interval is a
    /// contiguous run.
    pub fn new(use_stride: bool) -> Self {
        Self { use_stride }
    }

    /// Compresses the code points of `property`.
    pub fn compress(self, property: &Property) -> RangeTable {
        self.compress_ascending(&property.sorted_code_points())
    }

    /// Compresses `code_points`, given in any order and possibly repeated.
    pub fn compress_code_points(self, code_points: &[u32]) -> RangeTable {
        let mut sorted = code_points.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        self.compress_ascending(&sorted)
    }

    /// A single sweep: each code point either extends the open interval of
    /// its lane or closes it and opens a new one. Stride inference is greedy
    /// and never revisits a closed interval.
    fn compress_ascending(self, code_points: &[u32]) -> RangeTable {
        debug_assert!(
            code_points.windows(2).all(|w| w[0] < w[1]),
            "code points must be strictly ascending"
        );

        let mut narrow = Lane::default();
        let mut wide = Lane::default();
        for &cp in code_points {
            if cp <= MAX_NARROW {
                narrow.push(cp, self.use_stride, true);
            } else {
                wide.push(cp, self.use_stride, false);
            }
        }
        let narrow = narrow.finish();
        let wide = wide.finish();

        let latin_offset = narrow.iter().filter(|r| r.hi <= MAX_LATIN1).count();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the narrow lane only receives code points up to MAX_NARROW, so bounds and strides fit in `u16`."
        )]
        let r16 = narrow
            .iter()
            .map(|r| Range16 {
                lo: r.lo as u16,
                hi: r.hi as u16,
                stride: r.stride as u16,
            })
            .collect();
        let r32 = wide
            .iter()
            .map(|r| Range32 {
                lo: r.lo,
                hi: r.hi,
                stride: r.stride,
            })
            .collect();

        RangeTable {
            r16,
            r32,
            latin_offset,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Interval {
    lo: u32,
    hi: u32,
    stride: u32,
}

impl Interval {
    fn start(cp: u32) -> Self {
        Self {
            lo: cp,
            hi: cp,
            stride: 1,
        }
    }

    fn extend(&mut self, cp: u32, use_stride: bool) -> bool {
        if cp == self.hi + self.stride {
            self.hi = cp;
            true
        } else if use_stride && self.lo == self.hi {
            self.stride = cp - self.lo;
            self.hi = cp;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Default)]
struct Lane {
    open: Option<Interval>,
    closed: Vec<Interval>,
}

impl Lane {
    fn push(&mut self, cp: u32, use_stride: bool, split_latin1: bool) {
        if let Some(open) = &mut self.open {
            let crosses_latin1 = split_latin1 && open.hi <= MAX_LATIN1 && cp > MAX_LATIN1;
            if !crosses_latin1 && open.extend(cp, use_stride) {
                return;
            }
        }
        if let Some(done) = self.open.replace(Interval::start(cp)) {
            self.closed.push(done);
        }
    }

    fn finish(mut self) -> Vec<Interval> {
        self.closed.extend(self.open.take());
        self.closed
    }
}
