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

//! End-to-end parse scenarios over the public library API.

use chrono::{Datelike, Offset, Timelike};
use tomlproc::{get_array, get_int, get_string, parse, stringify, validate, Constraint,
               ErrorKind, FieldSchema, FieldType, Schema};

#[test]
fn single_string_pair_roundtrips() {
    let doc = parse("name = \"test\"").unwrap();
    assert_eq!(doc.root_table().len(), 1);
    assert_eq!(get_string(doc.root_table(), "name"), Some("test"));
    assert_eq!(stringify(&doc), "name = \"test\"\n");
}

#[test]
fn port_schema_violation_is_reported() {
    let doc = parse("port = 99999").unwrap();
    let schema = Schema::new()
        .with_field(FieldSchema::new("port", FieldType::Integer)
                        .required()
                        .with_constraint(Constraint::MaxValue(65535)));
    let result = validate(&schema, doc.root_table());
    assert!(! result.valid());
    assert_eq!(result.errors().len(), 1);
    let message = &result.errors()[0];
    assert!(message.contains("port"));
    assert!(message.contains("99999"));
    assert!(message.contains("65535"));
}

#[test]
fn leading_zero_integer_fails() {
    let err = parse("num = 007").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn double_underscore_integer_fails() {
    let err = parse("num = 1__2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn array_of_tables_collects_elements() {
    let doc = parse("[[products]]\nname = \"Hammer\"\n\n[[products]]\nname = \"Nail\"")
        .unwrap();
    let products = get_array(doc.root_table(), "products").unwrap();
    assert_eq!(products.len(), 2);
    let names: Vec<&str> = products.iter()
        .map(|p| get_string(p.value().as_table().unwrap(), "name").unwrap())
        .collect();
    assert_eq!(names, vec!["Hammer", "Nail"]);
}

#[test]
fn offset_datetime_fields_are_exact() {
    let doc = parse("dt = 1979-05-27T00:32:00-07:00").unwrap();
    let dt = doc.root_table().get("dt").unwrap().value()
                .as_offset_datetime().copied().unwrap();
    assert_eq!(dt.year(), 1979);
    assert_eq!(dt.month(), 5);
    assert_eq!(dt.day(), 27);
    assert_eq!(dt.hour(), 0);
    assert_eq!(dt.minute(), 32);
    assert_eq!(dt.second(), 0);
    assert_eq!(dt.nanosecond(), 0);
    assert_eq!(dt.offset().fix().local_minus_utc(), -420 * 60);
}

#[test]
fn multiline_backslash_joins_lines() {
    let source = "text = \"\"\"\nThe quick brown \\\n    fox jumps over \\\n    \
                  the lazy dog.\"\"\"";
    let doc = parse(source).unwrap();
    assert_eq!(get_string(doc.root_table(), "text"),
               Some("The quick brown fox jumps over the lazy dog."));
}

#[test]
fn empty_and_comment_only_documents() {
    assert!(parse("").unwrap().root_table().is_empty());
    assert!(parse("  \t \n\n").unwrap().root_table().is_empty());
    assert!(parse("# nothing here\n   # still nothing").unwrap().root_table().is_empty());
}

#[test]
fn integer_boundaries() {
    let doc = parse("max = 9223372036854775807\nmin = -9223372036854775808").unwrap();
    assert_eq!(get_int(doc.root_table(), "max"), Some(i64::MAX));
    assert_eq!(get_int(doc.root_table(), "min"), Some(i64::MIN));
    assert_eq!(parse("v = 9223372036854775808").unwrap_err().kind(),
               ErrorKind::InvalidValue);
    assert_eq!(parse("v = -9223372036854775809").unwrap_err().kind(),
               ErrorKind::InvalidValue);
}

#[test]
fn zero_forms_accepted() {
    let doc = parse("a = 0\nb = -0\nc = 0.0\nd = -0.0").unwrap();
    assert_eq!(get_int(doc.root_table(), "a"), Some(0));
    assert_eq!(get_int(doc.root_table(), "b"), Some(0));
    assert_eq!(doc.root_table().get("c").unwrap().value().as_float(), Some(0.0));
    assert_eq!(doc.root_table().get("d").unwrap().value().as_float(), Some(0.0));
}
