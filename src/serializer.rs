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

//! TOML and JSON emission for value trees.
//! TOML output walks each table in three passes so a section header never captures a
//! sibling scalar: first scalar and array pairs, then sub-tables as `[dotted.path]`
//! sections, finally arrays of tables as `[[dotted.path]]` sections.

use chrono::SecondsFormat;
use crate::document::{TomlDocument, TomlItem, TomlTable, TomlValue};
use crate::util::is_bare_key;

/// Formatting options for TOML emission.
/// Tables iterate their keys in byte-wise ascending order by construction, the sort_keys
/// switch therefore selects behavior that already holds; it is retained as part of the
/// stable options surface.
#[derive (Clone, Debug)]
pub struct FormatOptions {
    /// number of columns per nesting level
    pub indent_size: usize,
    /// indent with spaces; when false, one tab per level is used instead
    pub use_spaces: bool,
    /// insert a blank line between sibling sections and array of table elements
    pub blank_lines: bool,
    /// emit each table's keys in byte-wise ascending order
    pub sort_keys: bool
}
impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { indent_size: 2, use_spaces: true, blank_lines: true, sort_keys: false }
    }
}
impl FormatOptions {
    /// Returns the indentation prefix for the given nesting depth.
    fn indent(&self, depth: usize) -> String {
        if self.use_spaces {
            " ".repeat(self.indent_size * depth)
        } else {
            "\t".repeat(depth)
        }
    }
}

/// Serializes a document to TOML text with default formatting options.
pub fn stringify(document: &TomlDocument) -> String {
    stringify_with(document, &FormatOptions::default())
}

/// Serializes a document to TOML text.
///
/// # Arguments
/// * `document` - the document to serialize
/// * `options` - the formatting options
pub fn stringify_with(document: &TomlDocument, options: &FormatOptions) -> String {
    let mut buffer = String::with_capacity(1024);
    emit_table(&mut buffer, document.root_table(), &mut Vec::new(), options);
    buffer
}

/// Emits one table in three passes: scalar and array pairs, sub-table sections,
/// array of table sections.
///
/// # Arguments
/// * `buffer` - the string buffer receiving the output
/// * `table` - the table to emit
/// * `path` - the dotted section path of the table, empty for the root table
/// * `options` - the formatting options
fn emit_table(buffer: &mut String, table: &TomlTable,
              path: &mut Vec<String>, options: &FormatOptions) {
    let depth = path.len();
    let indent = options.indent(depth);
    for (key, item) in table {
        match item.value() {
            TomlValue::Table(_) => (),
            TomlValue::Array(a) if is_array_of_tables(a) => (),
            value => {
                buffer.push_str(&indent);
                buffer.push_str(&key_text(key));
                buffer.push_str(" = ");
                emit_value(buffer, value);
                buffer.push('\n');
            }
        }
    }
    for (key, item) in table {
        if let TomlValue::Table(sub_table) = item.value() {
            section_separator(buffer, options);
            path.push(key.clone());
            buffer.push_str(&indent);
            buffer.push('[');
            buffer.push_str(&section_path(path));
            buffer.push_str("]\n");
            emit_table(buffer, sub_table, path, options);
            path.pop();
        }
    }
    for (key, item) in table {
        if let TomlValue::Array(a) = item.value() {
            if ! is_array_of_tables(a) { continue }
            path.push(key.clone());
            for element in a {
                section_separator(buffer, options);
                buffer.push_str(&indent);
                buffer.push_str("[[");
                buffer.push_str(&section_path(path));
                buffer.push_str("]]\n");
                if let TomlValue::Table(element_table) = element.value() {
                    emit_table(buffer, element_table, path, options);
                }
            }
            path.pop();
        }
    }
}

/// Inserts a blank line before the next section, if configured and output exists already.
fn section_separator(buffer: &mut String, options: &FormatOptions) {
    if options.blank_lines && ! buffer.is_empty() && ! buffer.ends_with("\n\n") {
        buffer.push('\n');
    }
}

/// Indicates whether the given array must be emitted as an array of tables.
fn is_array_of_tables(array: &[TomlItem]) -> bool {
    ! array.is_empty()
    && array.iter().all(|item| matches!(item.value(), TomlValue::Table(_)))
}

/// Returns the dotted section path with every part emitted bare or quoted as needed.
fn section_path(path: &[String]) -> String {
    let mut res = String::with_capacity(32);
    for (i, part) in path.iter().enumerate() {
        if i > 0 { res.push('.'); }
        res.push_str(&key_text(part));
    }
    res
}

/// Returns the given key as emitted into TOML output: bare when it matches the bare key
/// pattern, as quoted basic string otherwise.
fn key_text(key: &str) -> String {
    if is_bare_key(key) { return key.to_string() }
    let mut res = String::with_capacity(key.len() + 2);
    res.push('"');
    escape_into(&mut res, key);
    res.push('"');
    res
}

/// Emits a single value in inline form.
fn emit_value(buffer: &mut String, value: &TomlValue) {
    match value {
        TomlValue::String(s) => {
            buffer.push('"');
            escape_into(buffer, s);
            buffer.push('"');
        },
        TomlValue::Boolean(b) => buffer.push_str(if *b { "true" } else { "false" }),
        TomlValue::Integer(i) => buffer.push_str(&i.to_string()),
        TomlValue::Float(f) => buffer.push_str(&float_text(*f)),
        TomlValue::OffsetDateTime(dt) => {
            buffer.push_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        },
        TomlValue::LocalDateTime(dt) => {
            buffer.push_str(&dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
        },
        TomlValue::LocalDate(d) => buffer.push_str(&d.format("%Y-%m-%d").to_string()),
        TomlValue::LocalTime(t) => buffer.push_str(&t.format("%H:%M:%S%.f").to_string()),
        TomlValue::Array(a) => {
            buffer.push('[');
            for (i, element) in a.iter().enumerate() {
                if i > 0 { buffer.push_str(", "); }
                emit_value(buffer, element.value());
            }
            buffer.push(']');
        },
        TomlValue::Table(t) => {
            // nested tables appearing as direct values are written inline
            buffer.push_str("{ ");
            for (i, (key, item)) in t.iter().enumerate() {
                if i > 0 { buffer.push_str(", "); }
                buffer.push_str(&key_text(key));
                buffer.push_str(" = ");
                emit_value(buffer, item.value());
            }
            if t.is_empty() { buffer.pop(); }
            buffer.push_str(" }");
        }
    }
}

/// Escapes a string for TOML basic string or JSON output.
/// The double quote, the backslash and the control characters with a short escape form
/// use it; all remaining control characters are written as unicode escapes.
fn escape_into(buffer: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            '\n' => buffer.push_str("\\n"),
            '\r' => buffer.push_str("\\r"),
            '\t' => buffer.push_str("\\t"),
            '\u{0008}' => buffer.push_str("\\b"),
            '\u{000c}' => buffer.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                buffer.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => buffer.push(c)
        }
    }
}

/// Returns the TOML text of a float value.
/// Finite values always carry a decimal point or an exponent so they parse back as floats.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return String::from(if value.is_sign_negative() { "-nan" } else { "nan" })
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-inf" } else { "inf" })
    }
    let mut res = value.to_string();
    if ! res.contains('.') && ! res.contains('e') && ! res.contains('E') {
        res.push_str(".0");
    }
    res
}

/// Serializes a document to compact JSON.
/// Non-finite floats have no JSON representation and are emitted as the strings
/// "inf", "-inf" and "nan".
pub fn to_json(document: &TomlDocument) -> String {
    let mut buffer = String::with_capacity(1024);
    write_json_table(&mut buffer, document.root_table(), None, 0);
    buffer
}

/// Serializes a document to pretty printed JSON.
///
/// # Arguments
/// * `document` - the document to serialize
/// * `indent` - the number of columns per nesting level
pub fn to_json_pretty(document: &TomlDocument, indent: usize) -> String {
    let mut buffer = String::with_capacity(2048);
    write_json_table(&mut buffer, document.root_table(), Some(indent), 0);
    buffer
}

/// Emits a single value as JSON.
///
/// # Arguments
/// * `buffer` - the string buffer receiving the output
/// * `value` - the value to emit
/// * `indent` - the pretty print indent width; **None** for compact output
/// * `depth` - the current nesting depth
fn write_json(buffer: &mut String, value: &TomlValue, indent: Option<usize>, depth: usize) {
    match value {
        TomlValue::String(s) => write_json_string(buffer, s),
        TomlValue::Boolean(b) => buffer.push_str(if *b { "true" } else { "false" }),
        TomlValue::Integer(i) => buffer.push_str(&i.to_string()),
        TomlValue::Float(f) => {
            if f.is_finite() {
                buffer.push_str(&float_text(*f));
            } else {
                write_json_string(buffer, &float_text(*f));
            }
        },
        TomlValue::OffsetDateTime(dt) => {
            write_json_string(buffer, &dt.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        },
        TomlValue::LocalDateTime(dt) => {
            write_json_string(buffer, &dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
        },
        TomlValue::LocalDate(d) => {
            write_json_string(buffer, &d.format("%Y-%m-%d").to_string());
        },
        TomlValue::LocalTime(t) => {
            write_json_string(buffer, &t.format("%H:%M:%S%.f").to_string());
        },
        TomlValue::Array(a) => write_json_array(buffer, a, indent, depth),
        TomlValue::Table(t) => write_json_table(buffer, t, indent, depth)
    }
}

/// Emits a table as JSON object.
fn write_json_table(buffer: &mut String, table: &TomlTable,
                    indent: Option<usize>, depth: usize) {
    if table.is_empty() {
        buffer.push_str("{}");
        return
    }
    let item_count = table.len();
    buffer.push('{');
    for (i, (key, item)) in table.iter().enumerate() {
        json_break(buffer, indent, depth + 1);
        write_json_string(buffer, key);
        buffer.push(':');
        if indent.is_some() { buffer.push(' '); }
        write_json(buffer, item.value(), indent, depth + 1);
        if i < item_count - 1 { buffer.push(','); }
    }
    json_break(buffer, indent, depth);
    buffer.push('}');
}

/// Emits an array as JSON array.
/// In pretty mode short arrays holding scalar values only stay on one line.
fn write_json_array(buffer: &mut String, array: &[TomlItem],
                    indent: Option<usize>, depth: usize) {
    if array.is_empty() {
        buffer.push_str("[]");
        return
    }
    let inline = indent.is_none() || is_short_scalar_array(array);
    let item_count = array.len();
    buffer.push('[');
    for (i, element) in array.iter().enumerate() {
        if ! inline {
            json_break(buffer, indent, depth + 1);
        }
        write_json(buffer, element.value(), indent, depth + 1);
        if i < item_count - 1 {
            buffer.push(',');
            if inline && indent.is_some() { buffer.push(' '); }
        }
    }
    if ! inline { json_break(buffer, indent, depth); }
    buffer.push(']');
}

/// Indicates whether the given array may stay on one line in pretty printed output.
fn is_short_scalar_array(array: &[TomlItem]) -> bool {
    array.len() <= 5
    && array.iter().all(|item| ! matches!(item.value(),
                                          TomlValue::Array(_) | TomlValue::Table(_)))
}

/// Emits a line break plus indentation in pretty mode, nothing in compact mode.
fn json_break(buffer: &mut String, indent: Option<usize>, depth: usize) {
    if let Some(width) = indent {
        buffer.push('\n');
        buffer.push_str(&" ".repeat(width * depth));
    }
}

/// Emits a JSON string literal.
/// Control characters below 0x20 are written as unicode escapes.
fn write_json_string(buffer: &mut String, s: &str) {
    buffer.push('"');
    for ch in s.chars() {
        match ch {
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            c if (c as u32) < 0x20 => {
                buffer.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => buffer.push(c)
        }
    }
    buffer.push('"');
}
