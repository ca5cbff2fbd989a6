// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small CLI that turns one version of the Unicode Character Database into
//! range tables for scripts, general categories and binary properties.
//! Files are read from a local UCD tree when one is given and fetched from
//! unicode.org otherwise.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use ucd_ranges_gen::{Config, Language, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Unicode version, e.g. 15.1.0.
    version: String,

    /// Directory the generated files are written to.
    #[arg(default_value = "out")]
    out_dir: PathBuf,

    /// Local UCD tree holding `<VERSION>/ucd/...`.
    #[arg(short, long, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Language of the generated files.
    #[arg(short, long, value_enum, default_value_t = Language::Rust)]
    lang: Language,

    /// Only emit intervals of consecutive code points.
    #[arg(long)]
    no_stride: bool,

    /// Where files missing from the local tree are fetched from.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print the property names of each group instead of generating tables.
    #[arg(long)]
    show_names: bool,
}

fn main() {
    let args = Args::parse();

    if !ucd_ranges_gen::is_valid_version(&args.version) {
        eprintln!("Unicode version number should be major.minor.update");
        process::exit(1);
    }

    ucd_ranges_gen::init_logging();

    let config = Config {
        version: args.version,
        out_dir: args.out_dir,
        data_root: args.data,
        base_url: args.base_url,
        language: args.lang,
        use_stride: !args.no_stride,
    };

    let result = if args.show_names {
        ucd_ranges_gen::show_names(&config).map(|groups| {
            for (kind, names) in groups {
                println!("{}:", kind.name());
                for name in names {
                    println!("  {name}");
                }
            }
        })
    } else {
        ucd_ranges_gen::generate(&config).map(|_| ())
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
