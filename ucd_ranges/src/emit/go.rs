// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::{self, Write};

use super::{Emitter, Group};

/// Emits a Go package of `unicode.RangeTable` variables.
#[derive(Copy, Clone, Debug, Default)]
pub struct GoEmitter;

impl Emitter for GoEmitter {
    fn extension(&self) -> &'static str {
        "go"
    }

    fn emit(&self, group: &Group, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "package {}", group.name)?;
        writeln!(out, "\nimport \"unicode\"")?;

        for entry in &group.entries {
            let table = &entry.table;
            writeln!(out)?;
            writeln!(out, "// {}: {} codepoints", entry.name, entry.code_points)?;
            writeln!(out, "var {} = &unicode.RangeTable{{", entry.name)?;
            write!(out, "  R16: []unicode.Range16{{ /* {} */", table.r16.len())?;
            for r in &table.r16 {
                write!(
                    out,
                    "\n    unicode.Range16{{Lo: 0x{:04X}, Hi: 0x{:04X}, Stride: {} }},",
                    r.lo, r.hi, r.stride
                )?;
            }
            if !table.r16.is_empty() {
                write!(out, "\n  ")?;
            }
            writeln!(out, "}},")?;
            write!(out, "  R32: []unicode.Range32{{ /* {} */", table.r32.len())?;
            for r in &table.r32 {
                write!(
                    out,
                    "\n    unicode.Range32{{Lo: 0x{:06X}, Hi: 0x{:06X}, Stride: {} }},",
                    r.lo, r.hi, r.stride
                )?;
            }
            if !table.r32.is_empty() {
                write!(out, "\n  ")?;
            }
            writeln!(out, "}},")?;
            writeln!(out, "  LatinOffset: {},", table.latin_offset)?;
            writeln!(out, "}}")?;
        }

        if !group.aliases.is_empty() {
            writeln!(out, "\n// Long names:\n")?;
            for alias in &group.aliases {
                writeln!(out, "var {} = {}", alias.name, alias.target)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
