// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `ucd_ranges` turns Unicode Character Database files into compact range tables.
//!
//! The pipeline has four stages:
//!
//! - [`parse_properties`] reads a UCD file into a [`PropertyTable`], one
//!   [`Property`] (a set of code points) per distinct value of a chosen column.
//! - [`category::build_categories`] derives the general categories that the
//!   data never lists explicitly: unassigned `Cn` and the grouped categories.
//! - [`Compressor`] turns each property into a [`RangeTable`] of stride-aware
//!   intervals, split into 16-bit and 32-bit lanes.
//! - An [`emit::Emitter`] writes a name-sorted [`emit::Group`] of range tables
//!   as source code.
//!
//! ## Example
//!
//! ```
//! use ucd_ranges::{parse_properties, Compressor, Range16};
//!
//! let data = "\
//! 0030..0039    ; ASCII_Hex_Digit # Nd  [10] DIGIT ZERO..DIGIT NINE
//! 0041..0046    ; ASCII_Hex_Digit # L&   [6] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER F
//! ";
//! let table = parse_properties(data.as_bytes(), 1).unwrap();
//! let hex = Compressor::default().compress(table.get("ASCII_Hex_Digit").unwrap());
//! assert_eq!(
//!     hex.r16,
//!     [
//!         Range16 { lo: 0x30, hi: 0x39, stride: 1 },
//!         Range16 { lo: 0x41, hi: 0x46, stride: 1 },
//!     ]
//! );
//! assert_eq!(hex.latin_offset, 2);
//! assert!(hex.contains(u32::from('C')));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

pub mod category;
pub mod emit;
mod error;
pub mod line;
mod property;
mod range_table;
mod table;

pub use error::{Error, ErrorKind, Result};
pub use property::Property;
pub use range_table::{
    Compressor, Range16, Range32, RangeTable, RangeTableRef, MAX_LATIN1, MAX_NARROW,
};
pub use table::{parse_properties, property_names, Accumulator, PropertyTable};
