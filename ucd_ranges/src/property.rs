// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use hashbrown::HashSet;

/// A named binary property: the set of code points that have it.
///
/// Insertion order is irrelevant and duplicates collapse; code points are
/// only sorted when the property is compressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Property {
    name: String,
    code_points: HashSet<u32>,
}

impl Property {
    /// Creates an empty property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code_points: HashSet::new(),
        }
    }

    /// Creates a property holding `code_points`.
    pub fn from_code_points(
        name: impl Into<String>,
        code_points: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            name: name.into(),
            code_points: code_points.into_iter().collect(),
        }
    }

    /// Returns a new property named `name` holding the union of `parts`.
    ///
    /// The inputs are left untouched. Merging nothing yields an empty property.
    pub fn merge<'a>(name: impl Into<String>, parts: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut out = Self::new(name);
        for part in parts {
            out.extend_from(part);
        }
        out
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of distinct code points.
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    /// Whether no code point has this property.
    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// Whether `cp` has this property.
    pub fn contains(&self, cp: u32) -> bool {
        self.code_points.contains(&cp)
    }

    /// Adds one code point.
    pub fn insert(&mut self, cp: u32) {
        self.code_points.insert(cp);
    }

    /// Adds every code point in `range`.
    pub fn insert_range(&mut self, range: RangeInclusive<u32>) {
        self.code_points.extend(range);
    }

    /// Adds every code point of `other`.
    pub fn extend_from(&mut self, other: &Self) {
        self.code_points.extend(other.code_points.iter().copied());
    }

    /// Iterates the code points in no particular order.
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.code_points.iter().copied()
    }

    /// The code points in ascending order.
    pub fn sorted_code_points(&self) -> Vec<u32> {
        let mut sorted: Vec<u32> = self.code_points().collect();
        sorted.sort_unstable();
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::Property;

    #[test]
    fn duplicates_collapse() {
        let mut p = Property::new("Dash");
        p.insert_range(0x2D..=0x2D);
        p.insert(0x2D);
        p.insert_range(0x2010..=0x2015);
        p.insert_range(0x2012..=0x2013);
        assert_eq!(p.len(), 7);
        assert_eq!(p.sorted_code_points()[0], 0x2D);
    }

    #[test]
    fn merge_is_union_and_leaves_inputs_alone() {
        let a = Property::from_code_points("Ll", [0x61, 0x62]);
        let b = Property::from_code_points("Lu", [0x41, 0x61]);
        let merged = Property::merge("LC", [&a, &b]);
        assert_eq!(merged.name(), "LC");
        assert_eq!(merged.sorted_code_points(), [0x41, 0x61, 0x62]);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        let none: [&Property; 0] = [];
        let merged = Property::merge("assigned", none);
        assert!(merged.is_empty());
    }
}
