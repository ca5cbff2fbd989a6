// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulation of parsed records into named properties.

use std::collections::BTreeSet;
use std::io::BufRead;

use hashbrown::HashMap;

use crate::line::{parse_line, Line, RangeMarker, Record};
use crate::{Error, Property, Result};

/// A mapping from property name to [`Property`].
///
/// Lookups are unordered; anything that affects output goes through
/// [`PropertyTable::sorted`] or [`PropertyTable::names`].
#[derive(Clone, Debug, Default)]
pub struct PropertyTable {
    properties: HashMap<String, Property>,
}

impl PropertyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the table holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Whether a property called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Returns the property called `name`, creating it empty on first sight.
    pub fn entry(&mut self, name: &str) -> &mut Property {
        self.properties
            .entry_ref(name)
            .or_insert_with(|| Property::new(name))
    }

    /// Inserts `property` under its own name, replacing any previous one.
    pub fn insert(&mut self, property: Property) {
        self.properties.insert(property.name().to_owned(), property);
    }

    /// Moves every property of `other` into this table. Properties present
    /// in both are unioned.
    pub fn absorb(&mut self, other: Self) {
        for (name, property) in other.properties {
            match self.properties.get_mut(&name) {
                Some(existing) => existing.extend_from(&property),
                None => {
                    self.properties.insert(name, property);
                }
            }
        }
    }

    /// Iterates the properties in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties.values()
    }

    /// The property names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The properties in ascending name order.
    pub fn sorted(&self) -> Vec<&Property> {
        let mut sorted: Vec<&Property> = self.iter().collect();
        sorted.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        sorted
    }
}

/// Applies parsed records to a [`PropertyTable`].
///
/// Tracks the pending start of a `UnicodeData.txt` range spelled as a
/// `<..., First>` line followed by a `<..., Last>` line.
#[derive(Debug, Default)]
pub struct Accumulator {
    table: PropertyTable,
    pending_first: Option<u32>,
}

impl Accumulator {
    /// Creates an accumulator over an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the code points of `record` to the property it names.
    ///
    /// A `First` record only remembers its code point; the matching `Last`
    /// record adds the whole range.
    pub fn apply(&mut self, record: &Record<'_>) -> Result<()> {
        let (low, high) = match record.range_marker() {
            Some(RangeMarker::First) => {
                self.pending_first = Some(record.range.low);
                return Ok(());
            }
            Some(RangeMarker::Last) => {
                let first = self
                    .pending_first
                    .take()
                    .ok_or_else(|| Error::unpaired_range_end(record.second))?;
                (first, record.range.high)
            }
            None => (record.range.low, record.range.high),
        };
        if low > high {
            return Err(Error::unpaired_range_end(record.second));
        }
        self.table.entry(record.name).insert_range(low..=high);
        Ok(())
    }

    /// Returns the accumulated table.
    pub fn finish(self) -> PropertyTable {
        self.table
    }
}

/// Reads a whole UCD file, taking property names from column `name_col`.
///
/// Stops at the first malformed line; errors carry its 1-based line number.
pub fn parse_properties<R: BufRead>(reader: R, name_col: usize) -> Result<PropertyTable> {
    let mut accumulator = Accumulator::new();
    for_each_record(reader, name_col, |record| accumulator.apply(record))?;
    Ok(accumulator.finish())
}

/// Lists the distinct names in column `name_col` of a UCD file, sorted.
pub fn property_names<R: BufRead>(reader: R, name_col: usize) -> Result<Vec<String>> {
    let mut names = BTreeSet::new();
    for_each_record(reader, name_col, |record| {
        if !names.contains(record.name) {
            names.insert(record.name.to_owned());
        }
        Ok(())
    })?;
    Ok(names.into_iter().collect())
}

fn for_each_record<R: BufRead>(
    reader: R,
    name_col: usize,
    mut f: impl FnMut(&Record<'_>) -> Result<()>,
) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|err| Error::io(err).at_line(number))?;
        let parsed = parse_line(&line, name_col);
        match parsed.map_err(|err| err.at_line(number))? {
            Line::Skip => {}
            Line::Record(record) => f(&record).map_err(|err| err.at_line(number))?,
        }
    }
    Ok(())
}
