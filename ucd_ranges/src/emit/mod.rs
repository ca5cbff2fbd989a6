// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialization of compressed property groups into source code.
//!
//! The engine hands an [`Emitter`] one [`Group`] at a time; the emitter owns
//! the target syntax and nothing else.

mod go;
mod rust;

pub use go::GoEmitter;
pub use rust::RustEmitter;

use std::io::{self, Write};

use crate::category::CategoryAlias;
use crate::{Compressor, PropertyTable, RangeTable};

/// One compressed property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The property name.
    pub name: String,
    /// How many code points the property holds.
    pub code_points: usize,
    /// The compressed intervals.
    pub table: RangeTable,
}

/// An additional name for an emitted property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias {
    /// The additional name.
    pub name: String,
    /// The name of the [`Entry`] it refers to.
    pub target: String,
}

impl From<&CategoryAlias> for Alias {
    fn from(alias: &CategoryAlias) -> Self {
        Self {
            name: alias.long_name.to_owned(),
            target: alias.short_name.to_owned(),
        }
    }
}

/// A named set of compressed properties, ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// The group name, e.g. `script`. Emitters use it as the module name.
    pub name: String,
    /// The Unicode version the data came from.
    pub version: String,
    /// The compressed properties, sorted by name.
    pub entries: Vec<Entry>,
    /// Extra names, in the order they should be emitted.
    pub aliases: Vec<Alias>,
}

impl Group {
    /// Compresses every property of `table`, in name order.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        table: &PropertyTable,
        compressor: Compressor,
    ) -> Self {
        let name = name.into();
        let entries = table
            .sorted()
            .into_iter()
            .map(|property| {
                let compressed = compressor.compress(property);
                log::debug!(
                    "{name}: {} has {} code points in {} + {} intervals",
                    property.name(),
                    property.len(),
                    compressed.r16.len(),
                    compressed.r32.len()
                );
                Entry {
                    name: property.name().to_owned(),
                    code_points: property.len(),
                    table: compressed,
                }
            })
            .collect();
        Self {
            name,
            version: version.into(),
            entries,
            aliases: Vec::new(),
        }
    }

    /// Adds extra names for existing entries.
    #[must_use]
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = Alias>) -> Self {
        self.aliases.extend(aliases);
        self
    }

    /// Looks up an entry by name.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|index| &self.entries[index])
    }
}

/// Writes a [`Group`] as source code for one target language.
pub trait Emitter {
    /// The file extension of emitted files, without the dot.
    fn extension(&self) -> &'static str;

    /// Writes `group` to `out`.
    fn emit(&self, group: &Group, out: &mut dyn Write) -> io::Result<()>;
}
