// ------------------------------------------------------------------------------------------------
// tomlproc - TOML 1.0.0 processor
//
// Copyright (c) 2026, The tomlproc authors.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// * Neither the name of the copyright holder nor the names of its
//   contributors may be used to endorse or promote products derived from
//   this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
// ------------------------------------------------------------------------------------------------

//! Round-trip and determinism properties over the public library API.

use std::collections::HashSet;
use tomlproc::{parse, stringify, stringify_with, to_json, to_json_pretty, FormatOptions,
               TomlTable, TomlValue};

const RICH_SOURCE: &str = r#"
title = "round trip"
count = 42
negative = -17
ratio = 0.25
big = 6.02e23
flag = true
off = false
empty = []
words = ["alpha", "beta"]
mixed = [1, "two", 3.5, [true]]
point = { x = 1, y = -2 }
stamp = 1979-05-27T00:32:00-07:00
local_stamp = 1979-05-27T07:32:00
birthday = 1979-05-27
alarm = 07:32:00

[server]
host = "localhost"
"quoted key" = "kept"

[server.limits]
cpu = 4
memory = 2048

[[jobs]]
id = 1
name = "first"

[[jobs]]
id = 2
name = "second"
"#;

/// Collects every table of a tree, depth first.
fn all_tables<'a>(table: &'a TomlTable, acc: &mut Vec<&'a TomlTable>) {
    acc.push(table);
    for item in table.values() {
        match item.value() {
            TomlValue::Table(t) => all_tables(t, acc),
            TomlValue::Array(a) => {
                for element in a {
                    if let TomlValue::Table(t) = element.value() {
                        all_tables(t, acc);
                    }
                }
            },
            _ => ()
        }
    }
}

#[test]
fn parse_stringify_parse_is_identity() {
    let doc = parse(RICH_SOURCE).unwrap();
    let reparsed = parse(&stringify(&doc)).unwrap();
    assert_eq!(doc.root_table(), reparsed.root_table());
}

#[test]
fn roundtrip_with_every_option_set() {
    let doc = parse(RICH_SOURCE).unwrap();
    let options = FormatOptions {
        indent_size: 4,
        use_spaces: false,
        blank_lines: false,
        sort_keys: true
    };
    let reparsed = parse(&stringify_with(&doc, &options)).unwrap();
    assert_eq!(doc.root_table(), reparsed.root_table());
}

#[test]
fn all_tables_have_distinct_keys() {
    let doc = parse(RICH_SOURCE).unwrap();
    let mut tables = Vec::new();
    all_tables(doc.root_table(), &mut tables);
    assert!(tables.len() > 5);
    for table in tables {
        let unique: HashSet<&String> = table.keys().collect();
        assert_eq!(unique.len(), table.len());
    }
}

#[test]
fn stringify_and_json_are_pure() {
    let doc = parse(RICH_SOURCE).unwrap();
    assert_eq!(stringify(&doc), stringify(&doc));
    assert_eq!(to_json(&doc), to_json(&doc));
    assert_eq!(to_json_pretty(&doc, 2), to_json_pretty(&doc, 2));
}

#[test]
fn json_shape_matches_tree() {
    let doc = parse("name = \"x\"\nnums = [1, 2]\n[sub]\nok = true\n").unwrap();
    let json = to_json(&doc);
    assert_eq!(json, "{\"name\":\"x\",\"nums\":[1,2],\"sub\":{\"ok\":true}}");
    // pretty output carries the same data with layout only
    let pretty = to_json_pretty(&doc, 2);
    let stripped: String = pretty.chars()
                                 .filter(|c| *c != '\n' && *c != ' ').collect();
    assert_eq!(stripped, json);
}

#[test]
fn local_datetime_roundtrips_without_offset() {
    let doc = parse("ldt = 1979-05-27T07:32:00\n").unwrap();
    let out = stringify(&doc);
    assert_eq!(out, "ldt = 1979-05-27T07:32:00\n");
    let reparsed = parse(&out).unwrap();
    assert!(reparsed.root_table().get("ldt").unwrap().value()
                    .as_local_datetime().is_some());
}

#[test]
fn nonfinite_floats_roundtrip_in_toml() {
    let doc = parse("a = inf\nb = -inf\nc = nan\n").unwrap();
    let reparsed = parse(&stringify(&doc)).unwrap();
    let t = reparsed.root_table();
    assert_eq!(t.get("a").unwrap().value().as_float(), Some(f64::INFINITY));
    assert_eq!(t.get("b").unwrap().value().as_float(), Some(f64::NEG_INFINITY));
    assert!(t.get("c").unwrap().value().as_float().unwrap().is_nan());
}
