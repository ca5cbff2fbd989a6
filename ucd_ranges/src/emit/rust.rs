// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::{self, Write};

use super::{Emitter, Group};

/// Emits a Rust module of [`RangeTableRef`](crate::RangeTableRef) constants.
///
/// Aliases become `pub use` re-exports, so they name the same constant rather
/// than a copy.
#[derive(Copy, Clone, Debug, Default)]
pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn extension(&self) -> &'static str {
        "rs"
    }

    fn emit(&self, group: &Group, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "// Generated by ucd_ranges_gen from Unicode {}. Do not edit.\n",
            group.version
        )?;
        writeln!(
            out,
            "//! `{}` range tables for Unicode {}.\n",
            group.name, group.version
        )?;
        writeln!(
            out,
            "#![allow(non_upper_case_globals, unused_imports, reason = \"names follow the Unicode Character Database\")]\n"
        )?;
        writeln!(out, "use ucd_ranges::{{Range16, Range32, RangeTableRef}};")?;

        for entry in &group.entries {
            let table = &entry.table;
            writeln!(out)?;
            writeln!(
                out,
                "/// `{}`: {} code points.",
                entry.name, entry.code_points
            )?;
            writeln!(out, "#[rustfmt::skip]")?;
            writeln!(
                out,
                "pub const {}: RangeTableRef<'static> = RangeTableRef {{",
                entry.name
            )?;
            write_ranges(
                out,
                "r16",
                table.r16.iter().map(|r| {
                    format!(
                        "Range16 {{ lo: 0x{:04X}, hi: 0x{:04X}, stride: {} }}",
                        r.lo, r.hi, r.stride
                    )
                }),
            )?;
            write_ranges(
                out,
                "r32",
                table.r32.iter().map(|r| {
                    format!(
                        "Range32 {{ lo: 0x{:06X}, hi: 0x{:06X}, stride: {} }}",
                        r.lo, r.hi, r.stride
                    )
                }),
            )?;
            writeln!(out, "    latin_offset: {},", table.latin_offset)?;
            writeln!(out, "}};")?;
        }

        if !group.aliases.is_empty() {
            writeln!(out, "\n// Long names:\n")?;
            for alias in &group.aliases {
                writeln!(out, "pub use self::{} as {};", alias.target, alias.name)?;
            }
        }
        Ok(())
    }
}

fn write_ranges(
    out: &mut dyn Write,
    field: &str,
    ranges: impl ExactSizeIterator<Item = String>,
) -> io::Result<()> {
    if ranges.len() == 0 {
        return writeln!(out, "    {field}: &[],");
    }
    writeln!(out, "    {field}: &[ // {}", ranges.len())?;
    for range in ranges {
        writeln!(out, "        {range},")?;
    }
    writeln!(out, "    ],")
}
