// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! See `./main.rs`.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod source;

pub use source::{UcdFile, UcdSource, DEFAULT_BASE_URL};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex_lite::Regex;
use ucd_ranges::category::{build_categories, CATEGORY_ALIASES};
use ucd_ranges::emit::{Alias, Emitter, GoEmitter, Group, RustEmitter};
use ucd_ranges::{Compressor, Error, PropertyTable, Result};

/// `Scripts.txt`: one script name per range.
pub const SCRIPTS: UcdFile = UcdFile {
    path: "ucd/Scripts.txt",
    name_col: 1,
};

/// `UnicodeData.txt`, read for its general category column.
pub const UNICODE_DATA: UcdFile = UcdFile {
    path: "ucd/UnicodeData.txt",
    name_col: 2,
};

/// `PropList.txt`: miscellaneous binary properties.
pub const PROP_LIST: UcdFile = UcdFile {
    path: "ucd/PropList.txt",
    name_col: 1,
};

/// `DerivedCoreProperties.txt`: derived binary properties.
pub const DERIVED_CORE_PROPERTIES: UcdFile = UcdFile {
    path: "ucd/DerivedCoreProperties.txt",
    name_col: 1,
};

/// `emoji-data.txt`: emoji binary properties.
pub const EMOJI_DATA: UcdFile = UcdFile {
    path: "ucd/emoji/emoji-data.txt",
    name_col: 1,
};

/// The target language of generated files.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// A Rust module of `ucd_ranges::RangeTableRef` constants.
    #[default]
    Rust,
    /// A Go package of `unicode.RangeTable` variables.
    Go,
}

impl Language {
    /// The emitter for this language.
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            Self::Rust => Box::new(RustEmitter),
            Self::Go => Box::new(GoEmitter),
        }
    }
}

/// The groups of generated range tables, one output file each.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GroupKind {
    /// Scripts, from [`SCRIPTS`].
    Script,
    /// General categories, from [`UNICODE_DATA`], with derived categories
    /// and long-name aliases.
    Category,
    /// Binary properties, from [`PROP_LIST`], [`DERIVED_CORE_PROPERTIES`] and
    /// [`EMOJI_DATA`] combined.
    Property,
}

impl GroupKind {
    /// Every group, in generation order.
    pub const ALL: [Self; 3] = [Self::Script, Self::Category, Self::Property];

    /// The group name, used for the output directory and module.
    pub fn name(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Category => "category",
            Self::Property => "property",
        }
    }

    /// The UCD files the group is read from.
    pub fn files(self) -> &'static [UcdFile] {
        match self {
            Self::Script => &[SCRIPTS],
            Self::Category => &[UNICODE_DATA],
            Self::Property => &[PROP_LIST, DERIVED_CORE_PROPERTIES, EMOJI_DATA],
        }
    }

    /// Reads, derives and compresses the group.
    pub fn build(self, source: &UcdSource, compressor: Compressor) -> Result<Group> {
        let mut table = PropertyTable::new();
        for &file in self.files() {
            table.absorb(source.parse(file)?);
        }
        if self != Self::Category {
            return Ok(Group::new(self.name(), source.version(), &table, compressor));
        }

        if let Err(err) = build_categories(&mut table) {
            return Err(err.with_source_name(UNICODE_DATA.path));
        }
        let group = Group::new(self.name(), source.version(), &table, compressor);
        Ok(group.with_aliases(CATEGORY_ALIASES.iter().map(Alias::from)))
    }

    /// The sorted property names found in the group's files, before any
    /// derivation.
    pub fn names(self, source: &UcdSource) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for &file in self.files() {
            names.extend(source.names(file)?);
        }
        names.sort_unstable();
        names.dedup();
        Ok(names)
    }
}

/// Settings for one generator run.
#[derive(Clone, Debug)]
pub struct Config {
    /// The Unicode version, as `major.minor.update`.
    pub version: String,
    /// The directory generated files are written to.
    pub out_dir: PathBuf,
    /// A local UCD tree holding `<version>/ucd/...`.
    pub data_root: Option<PathBuf>,
    /// Where missing files are fetched from.
    pub base_url: String,
    /// The target language.
    pub language: Language,
    /// Whether intervals may have strides other than 1.
    pub use_stride: bool,
}

impl Config {
    /// A configuration with default settings for `version`.
    pub fn new(version: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            out_dir: out_dir.into(),
            data_root: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            language: Language::default(),
            use_stride: true,
        }
    }

    /// The source UCD files are read from.
    pub fn source(&self) -> UcdSource {
        UcdSource::new(&self.version)
            .with_data_root(self.data_root.clone())
            .with_base_url(&self.base_url)
    }
}

/// Whether `version` looks like a Unicode version, e.g. `15.1.0`.
pub fn is_valid_version(version: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{1,2}(\.[0-9]+){2}$").unwrap())
        .is_match(version)
}

/// Installs the logger, at `info` level unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
}

/// Generates every group into `config.out_dir`, returning the written files.
///
/// Groups are built and written one at a time; the first error aborts the run.
pub fn generate(config: &Config) -> Result<Vec<PathBuf>> {
    let source = config.source();
    let compressor = Compressor::new(config.use_stride);
    let emitter = config.language.emitter();

    let mut written = Vec::new();
    for kind in GroupKind::ALL {
        let group = kind.build(&source, compressor)?;
        written.push(write_group(&config.out_dir, &group, emitter.as_ref())?);
    }
    Ok(written)
}

/// Lists the property names of every group.
pub fn show_names(config: &Config) -> Result<Vec<(GroupKind, Vec<String>)>> {
    let source = config.source();
    GroupKind::ALL
        .into_iter()
        .map(|kind| Ok((kind, kind.names(&source)?)))
        .collect()
}

/// Writes `group` to `<out_dir>/<name>/<name>.<ext>`.
pub fn write_group(out_dir: &Path, group: &Group, emitter: &dyn Emitter) -> Result<PathBuf> {
    let dir = out_dir.join(&group.name);
    fs::create_dir_all(&dir).map_err(|err| io_error(&dir, err))?;
    let path = dir.join(format!("{}.{}", group.name, emitter.extension()));

    let file = File::create(&path).map_err(|err| io_error(&path, err))?;
    let mut out = BufWriter::new(file);
    emitter
        .emit(group, &mut out)
        .and_then(|()| out.flush())
        .map_err(|err| io_error(&path, err))?;

    log::info!(
        "Wrote {} range tables and {} aliases to {}",
        group.entries.len(),
        group.aliases.len(),
        path.display()
    );
    Ok(path)
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    Error::io(err).with_source_name(path.display().to_string())
}
