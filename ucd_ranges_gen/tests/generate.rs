// Copyright 2025 the UCD Ranges Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs the generator over a small local UCD tree.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use tempfile::TempDir;
use ucd_ranges::ErrorKind;
use ucd_ranges_gen::{generate, show_names, Config, GroupKind, Language};

const VERSION: &str = "15.1.0";

const SCRIPTS: &str = "\
# Scripts-15.1.0.txt
0000..0040    ; Common # Cc  [32] <control-0000>..<control-001F>
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
0061..007A    ; Latin # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
0370..0373    ; Greek # L&   [4] GREEK CAPITAL LETTER HETA..GREEK SMALL LETTER ARCHAIC SAMPI
10330..1034A  ; Gothic # Lo  [27] GOTHIC LETTER AHSA..GOTHIC LETTER NINE HUNDRED
";

/// One or two records per two-letter category, including the bracketed
/// ranges used for ideographs, surrogates and private use.
const UNICODE_DATA: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
001F;<control>;Cc;0;S;;;;;N;INFORMATION SEPARATOR ONE;;;;
0020;SPACE;Zs;0;WS;;;;;N;;;;;
0021;EXCLAMATION MARK;Po;0;ON;;;;;N;;;;;
0024;DOLLAR SIGN;Sc;0;ET;;;;;N;;;;;
0028;LEFT PARENTHESIS;Ps;0;ON;;;;;Y;OPENING PARENTHESIS;;;;
0029;RIGHT PARENTHESIS;Pe;0;ON;;;;;Y;CLOSING PARENTHESIS;;;;
002B;PLUS SIGN;Sm;0;ES;;;;;N;;;;;
002D;HYPHEN-MINUS;Pd;0;ES;;;;;N;;;;;
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;
0031;DIGIT ONE;Nd;0;EN;;1;1;1;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0043;LATIN CAPITAL LETTER C;Lu;0;L;;;;;N;;;;0063;
0045;LATIN CAPITAL LETTER E;Lu;0;L;;;;;N;;;;0065;
005E;CIRCUMFLEX ACCENT;Sk;0;ON;;;;;N;SPACING CIRCUMFLEX;;;;
005F;LOW LINE;Pc;0;ON;;;;;N;SPACING UNDERSCORE;;;;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
00A6;BROKEN BAR;So;0;ON;;;;;N;BROKEN VERTICAL BAR;;;;
00AB;LEFT-POINTING DOUBLE ANGLE QUOTATION MARK;Pi;0;ON;;;;;Y;LEFT POINTING GUILLEMET;;;;
00AD;SOFT HYPHEN;Cf;0;BN;;;;;N;;;;;
00B2;SUPERSCRIPT TWO;No;0;EN;<super> 0032;;2;2;N;SUPERSCRIPT DIGIT TWO;;;;
00BB;RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK;Pf;0;ON;;;;;Y;RIGHT POINTING GUILLEMET;;;;
01C5;LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON;Lt;0;L;<compat> 0044 017E;;;;N;LATIN LETTER CAPITAL D SMALL Z HACEK;;01C4;01C6;01C5
02B0;MODIFIER LETTER SMALL H;Lm;0;L;<super> 0068;;;;N;;;;;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;
0488;COMBINING CYRILLIC HUNDRED THOUSANDS SIGN;Me;0;NSM;;;;;N;;;;;
0903;DEVANAGARI SIGN VISARGA;Mc;0;L;;;;;N;;;;;
16EE;RUNIC ARLAUG SYMBOL;Nl;0;L;;;17;17;N;;;;;
2028;LINE SEPARATOR;Zl;0;WS;;;;;N;;;;;
2029;PARAGRAPH SEPARATOR;Zp;0;B;;;;;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;
DB7F;<Non Private Use High Surrogate, Last>;Cs;0;L;;;;;N;;;;;
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;
F8FF;<Private Use, Last>;Co;0;L;;;;;N;;;;;
20000;<CJK Ideograph Extension B, First>;Lo;0;L;;;;;N;;;;;
2A6DF;<CJK Ideograph Extension B, Last>;Lo;0;L;;;;;N;;;;;
";

const PROP_LIST: &str = "\
0009..000D    ; White_Space # Cc   [5] <control-0009>..<control-000D>
0020          ; White_Space # Zs       SPACE
2010          ; Dash # Pd       HYPHEN
2012          ; Dash # Pd       FIGURE DASH
2014          ; Dash # Pd       EM DASH
";

const DERIVED_CORE_PROPERTIES: &str = "\
0041..005A    ; Alphabetic # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
0061..007A    ; Alphabetic # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
";

const EMOJI_DATA: &str = "\
0023          ; Emoji                # E0.0   [1] (#️)       hash sign
1F600         ; Emoji                # E1.0   [1] (😀)       grinning face
";

/// Lays out `<root>/<version>/ucd/...` the way unicode.org publishes it.
fn ucd_tree() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let ucd = root.path().join(VERSION).join("ucd");
    fs::create_dir_all(ucd.join("emoji")).unwrap();
    fs::write(ucd.join("Scripts.txt"), SCRIPTS).unwrap();
    fs::write(ucd.join("UnicodeData.txt"), UNICODE_DATA).unwrap();
    fs::write(ucd.join("PropList.txt"), PROP_LIST).unwrap();
    fs::write(
        ucd.join("DerivedCoreProperties.txt"),
        DERIVED_CORE_PROPERTIES,
    )
    .unwrap();
    fs::write(ucd.join("emoji").join("emoji-data.txt"), EMOJI_DATA).unwrap();
    root
}

fn config(data: &Path, out: &Path, language: Language) -> Config {
    Config {
        data_root: Some(data.to_owned()),
        language,
        // Nothing listens on the discard port, so a missing file fails fast.
        base_url: "http://127.0.0.1:9".to_owned(),
        ..Config::new(VERSION, out)
    }
}

#[test]
fn writes_rust_modules() {
    let data = ucd_tree();
    let out = tempfile::tempdir().unwrap();
    let written = generate(&config(data.path(), out.path(), Language::Rust)).unwrap();
    assert_eq!(
        written,
        [
            out.path().join("script").join("script.rs"),
            out.path().join("category").join("category.rs"),
            out.path().join("property").join("property.rs"),
        ]
    );

    let script = fs::read_to_string(&written[0]).unwrap();
    assert!(script.contains("pub const Gothic: RangeTableRef<'static>"));
    assert!(script.contains("pub const Latin: RangeTableRef<'static>"));

    let category = fs::read_to_string(&written[1]).unwrap();
    assert!(category.contains("pub const Cn: RangeTableRef<'static>"));
    assert!(category.contains("pub const L: RangeTableRef<'static>"));
    assert!(category.contains("pub use self::Lu as Uppercase_Letter;"));

    let property = fs::read_to_string(&written[2]).unwrap();
    for name in ["Alphabetic", "Dash", "Emoji", "White_Space"] {
        assert!(property.contains(&format!("pub const {name}: ")), "{name}");
    }
}

#[test]
fn writes_go_packages() {
    let data = ucd_tree();
    let out = tempfile::tempdir().unwrap();
    let written = generate(&config(data.path(), out.path(), Language::Go)).unwrap();
    for path in &written {
        assert_eq!(path.extension().unwrap(), "go");
    }

    let path = out.path().join("category").join("category.go");
    let category = fs::read_to_string(path).unwrap();
    assert!(category.starts_with("package category\n"));
    assert!(category.contains("var Nd = &unicode.RangeTable{"));
    assert!(category.contains("var Decimal_Number = Nd"));
}

#[test]
fn stride_detection_can_be_disabled() {
    let data = ucd_tree();
    let out = tempfile::tempdir().unwrap();
    let strided = "Range16 { lo: 0x2010, hi: 0x2014, stride: 2 }";
    let mut config = config(data.path(), out.path(), Language::Rust);
    let path = out.path().join("property").join("property.rs");

    generate(&config).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains(strided));

    config.use_stride = false;
    generate(&config).unwrap();
    let property = fs::read_to_string(&path).unwrap();
    assert!(!property.contains(strided));
    assert!(property.contains("Range16 { lo: 0x2012, hi: 0x2012, stride: 1 }"));
}

#[test]
fn lists_names_per_group() {
    let data = ucd_tree();
    let out = tempfile::tempdir().unwrap();
    let groups = show_names(&config(data.path(), out.path(), Language::Rust)).unwrap();
    let kinds: Vec<GroupKind> = groups.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, GroupKind::ALL);
    assert_eq!(groups[0].1, ["Common", "Gothic", "Greek", "Latin"]);
    assert_eq!(
        groups[1].1,
        [
            "Cc", "Cf", "Co", "Cs", "Ll", "Lm", "Lo", "Lt", "Lu", "Mc", "Me", "Mn", "Nd", "Nl",
            "No", "Pc", "Pd", "Pe", "Pf", "Pi", "Po", "Ps", "Sc", "Sk", "Sm", "So", "Zl", "Zp",
            "Zs",
        ]
    );
    assert_eq!(groups[2].1, ["Alphabetic", "Dash", "Emoji", "White_Space"]);
}

#[test]
fn missing_files_are_fetched() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let err = generate(&config(data.path(), out.path(), Language::Rust)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fetch);
    let message = err.to_string();
    assert!(message.contains("127.0.0.1:9/15.1.0/ucd/Scripts.txt"), "{message}");
    assert!(!out.path().join("script").exists());
}

#[test]
fn unknown_version_is_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        let mut stream = reader.into_inner();
        let response = "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
        stream.write_all(response.as_bytes()).unwrap();
    });

    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let config = Config {
        base_url: format!("http://{addr}"),
        ..config(data.path(), out.path(), Language::Rust)
    };
    let err = generate(&config).unwrap_err();
    server.join().unwrap();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    let message = err.to_string();
    assert!(message.contains("status 404"), "{message}");
    assert!(message.contains("Is this a valid version?"), "{message}");
    assert!(message.contains("/15.1.0/ucd/Scripts.txt"), "{message}");
    assert!(!out.path().join("script").exists());
}
