// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! General category derivation.
//!
//! `UnicodeData.txt` only lists the two-letter categories of assigned code
//! points. The unassigned category `Cn` and the one-letter groups (plus `LC`)
//! are derived here, and every category gets its long name(s) from
//! [`CATEGORY_ALIASES`], following table 12 of UAX #44.

use crate::line::MAX_CODE_POINT;
use crate::{Error, Property, PropertyTable, Result};

/// The short name of the unassigned category.
pub const UNASSIGNED: &str = "Cn";

/// A general category value alias from `PropertyValueAliases.txt`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CategoryAlias {
    /// The short name, used as the emitted property name.
    pub short_name: &'static str,
    /// A long name, emitted as an alias of `short_name`.
    pub long_name: &'static str,
    /// The categories unioned to build `short_name`; empty for categories
    /// that are read directly from the data.
    pub constituents: &'static [&'static str],
}

const fn leaf(short_name: &'static str, long_name: &'static str) -> CategoryAlias {
    CategoryAlias {
        short_name,
        long_name,
        constituents: &[],
    }
}

const fn group(
    short_name: &'static str,
    long_name: &'static str,
    constituents: &'static [&'static str],
) -> CategoryAlias {
    CategoryAlias {
        short_name,
        long_name,
        constituents,
    }
}

/// Every general category alias, ordered by short name.
///
/// A short name may occur more than once (`Cc` is both `cntrl` and
/// `Control`); each occurrence names the same set.
pub const CATEGORY_ALIASES: &[CategoryAlias] = &[
    group("C", "Other", &["Cc", "Cf", "Cn", "Co", "Cs"]),
    leaf("Cc", "cntrl"),
    leaf("Cc", "Control"),
    leaf("Cf", "Format"),
    leaf("Cn", "Unassigned"),
    leaf("Co", "Private_Use"),
    leaf("Cs", "Surrogate"),
    group("L", "Letter", &["Ll", "Lm", "Lo", "Lt", "Lu"]),
    group("LC", "Cased_Letter", &["Ll", "Lt", "Lu"]),
    leaf("Ll", "Lowercase_Letter"),
    leaf("Lm", "Modifier_Letter"),
    leaf("Lo", "Other_Letter"),
    leaf("Lt", "Titlecase_Letter"),
    leaf("Lu", "Uppercase_Letter"),
    leaf("M", "Combining_Mark"),
    group("M", "Mark", &["Mc", "Me", "Mn"]),
    leaf("Mc", "Spacing_Mark"),
    leaf("Me", "Enclosing_Mark"),
    leaf("Mn", "Nonspacing_Mark"),
    group("N", "Number", &["Nd", "Nl", "No"]),
    leaf("Nd", "digit"),
    leaf("Nd", "Decimal_Number"),
    leaf("Nl", "Letter_Number"),
    leaf("No", "Other_Number"),
    group(
        "P",
        "Punctuation",
        &["Pc", "Pd", "Pe", "Pf", "Pi", "Po", "Ps"],
    ),
    leaf("P", "punct"),
    leaf("Pc", "Connector_Punctuation"),
    leaf("Pd", "Dash_Punctuation"),
    leaf("Pe", "Close_Punctuation"),
    leaf("Pf", "Final_Punctuation"),
    leaf("Pi", "Initial_Punctuation"),
    leaf("Po", "Other_Punctuation"),
    leaf("Ps", "Open_Punctuation"),
    group("S", "Symbol", &["Sc", "Sk", "Sm", "So"]),
    leaf("Sc", "Currency_Symbol"),
    leaf("Sk", "Modifier_Symbol"),
    leaf("Sm", "Math_Symbol"),
    leaf("So", "Other_Symbol"),
    group("Z", "Separator", &["Zl", "Zp", "Zs"]),
    leaf("Zl", "Line_Separator"),
    leaf("Zp", "Paragraph_Separator"),
    leaf("Zs", "Space_Separator"),
];

/// Adds the unassigned category: every code point in `0..=10FFFF` that no
/// property of `table` contains.
pub fn derive_unassigned(table: &mut PropertyTable) {
    let assigned = Property::merge("assigned", table.iter());
    let unassigned = Property::from_code_points(
        UNASSIGNED,
        (0..=MAX_CODE_POINT).filter(|cp| !assigned.contains(*cp)),
    );
    log::debug!(
        "{} code points assigned, {} unassigned",
        assigned.len(),
        unassigned.len()
    );
    table.insert(unassigned);
}

/// Builds every grouped category of `aliases` that `table` lacks by unioning
/// its constituents.
///
/// Fails if a constituent is missing, or if a category that only has long
/// names (no constituents) is absent once grouping is done.
pub fn coalesce_categories(table: &mut PropertyTable, aliases: &[CategoryAlias]) -> Result<()> {
    for alias in aliases {
        if alias.constituents.is_empty() || table.contains(alias.short_name) {
            continue;
        }
        let mut parts = Vec::with_capacity(alias.constituents.len());
        for &name in alias.constituents {
            let part = table
                .get(name)
                .ok_or_else(|| Error::missing_constituent(alias.short_name, name))?;
            parts.push(part);
        }
        let merged = Property::merge(alias.short_name, parts);
        table.insert(merged);
    }

    if let Some(alias) = aliases.iter().find(|a| !table.contains(a.short_name)) {
        return Err(Error::missing_constituent(
            alias.long_name,
            alias.short_name,
        ));
    }
    Ok(())
}

/// Runs [`derive_unassigned`] and then [`coalesce_categories`] with
/// [`CATEGORY_ALIASES`], in that order, since `C` includes `Cn`.
pub fn build_categories(table: &mut PropertyTable) -> Result<()> {
    derive_unassigned(table);
    coalesce_categories(table, CATEGORY_ALIASES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    /// A table with one code point per two-letter category, `Cn` excluded.
    fn leaf_table() -> PropertyTable {
        let mut table = PropertyTable::new();
        let mut cp = 0x20;
        for alias in CATEGORY_ALIASES {
            let is_leaf = alias.constituents.is_empty() && alias.short_name.len() == 2;
            if is_leaf && alias.short_name != UNASSIGNED && !table.contains(alias.short_name) {
                table.entry(alias.short_name).insert(cp);
                cp += 1;
            }
        }
        table
    }

    #[test]
    fn unassigned_is_the_complement() {
        let mut table = PropertyTable::new();
        table.entry("Lu").insert_range(0x41..=0x5A);
        table.entry("Co").insert_range(0xE000..=0xF8FF);
        derive_unassigned(&mut table);

        let cn = table.get(UNASSIGNED).unwrap();
        let assigned = (0x5A - 0x41 + 1) + (0xF8FF - 0xE000 + 1);
        assert_eq!(cn.len(), MAX_CODE_POINT as usize + 1 - assigned);
        assert!(!cn.contains(0x41));
        assert!(!cn.contains(0xE000));
        assert!(cn.contains(0x40));
        assert!(cn.contains(MAX_CODE_POINT));
    }

    #[test]
    fn groups_are_unions_of_constituents() {
        let mut table = leaf_table();
        build_categories(&mut table).unwrap();

        for alias in CATEGORY_ALIASES
            .iter()
            .filter(|a| !a.constituents.is_empty())
        {
            let expected = Property::merge(
                "",
                alias.constituents.iter().map(|c| table.get(c).unwrap()),
            );
            let actual = table.get(alias.short_name).unwrap();
            assert_eq!(
                actual.sorted_code_points(),
                expected.sorted_code_points(),
                "{} differs from the union of its constituents",
                alias.short_name
            );
        }
        assert_eq!(table.get("L").unwrap().len(), 5);
        assert_eq!(table.get("LC").unwrap().len(), 3);
    }

    #[test]
    fn mark_is_grouped_despite_leaf_alias() {
        let mut table = leaf_table();
        build_categories(&mut table).unwrap();
        assert_eq!(table.get("M").unwrap().len(), 3);
    }

    #[test]
    fn existing_group_is_kept() {
        let mut table = leaf_table();
        table.entry("Z").insert(0x3000);
        build_categories(&mut table).unwrap();
        assert_eq!(table.get("Z").unwrap().sorted_code_points(), [0x3000]);
    }

    #[test]
    fn missing_constituent_is_fatal() {
        let mut table = leaf_table();
        let err = coalesce_categories(&mut table, CATEGORY_ALIASES).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingConstituent);
    }
}
