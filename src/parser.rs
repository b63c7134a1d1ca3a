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

//! Recursive descent TOML parser.
//! Consumes the token stream of the scanner with one token lookahead, builds the value tree
//! and enforces the structural rules of TOML 1.0. Decoding of string escapes, numbers and
//! date/time values happens here; the scanner only settles lexeme boundaries.

use chrono::{DateTime, ParseError};
use chrono::naive::{NaiveDate, NaiveDateTime, NaiveTime};
use chrono::offset::FixedOffset;
use log::{debug, trace};
use num_traits::float::FloatCore;
use crate::document::*;
use crate::errorhandling::*;
use crate::scanner::{StringKind, Token, TokenId, TomlScanner};
use crate::toml_err;
use crate::util::quoted;

/// Result of a parse run that surfaces structured error information.
/// Exactly one of the two fields is populated.
#[derive (Debug)]
pub struct ParseOutcome {
    /// the parsed document on success
    pub document: Option<TomlDocument>,
    /// the structured failure description on error
    pub error: Option<ErrorContext>
}

/// TOML parser.
pub(crate) struct TomlParser {
    // lexical analyzer
    scanner: TomlScanner
}
impl TomlParser {
    /// Creates a parser for the given TOML string.
    ///
    /// # Arguments
    /// * `data` - the string containing the input data to parse
    pub(crate) fn new(data: &str) -> TomlParser {
        TomlParser { scanner: TomlScanner::new(data) }
    }

    /// Parses a TOML formatted string.
    /// The parsing process quits as soon as the first error is encountered.
    ///
    /// # Errors
    /// Returns a structure containing error information, if the string can't be parsed
    pub(crate) fn parse(&mut self) -> Result<TomlDocument, TomlError> {
        debug!("starting parse of {} input line(s)", self.scanner.source_line_count());
        let mut document = TomlDocument::default();
        loop {
            let token = self.scanner.next_token()?;
            match token.id {
                TokenId::Newline => (),
                TokenId::EndOfInput => break,
                TokenId::LeftBracket => self.table_header(&mut document, &token)?,
                _ => {
                    let (key, item) = self.key_value_pair(token)?;
                    document.insert(&key, item)?;
                    self.expect_line_end()?;
                }
            }
        }
        debug!("parse finished");
        Ok(document)
    }

    /// Parses a TOML formatted string and converts any failure into a structured
    /// error context with source line, caret position and an optional hint.
    pub(crate) fn parse_with_context(&mut self) -> ParseOutcome {
        match self.parse() {
            Ok(document) => ParseOutcome { document: Some(document), error: None },
            Err(error) => {
                let source_line = self.scanner.source_line(error.line());
                let hint = derive_hint(&error);
                ParseOutcome {
                    document: None,
                    error: Some(ErrorContext::new(&error, &source_line, hint))
                }
            }
        }
    }

    /// Parses the header of a table or an array of tables and selects the denoted table
    /// in the document. The leading bracket has already been consumed.
    ///
    /// # Arguments
    /// * `document` - the document under construction
    /// * `lbracket` - the consumed opening bracket token
    fn table_header(&mut self, document: &mut TomlDocument,
                    lbracket: &Token) -> Result<(), TomlError> {
        let mut first = self.scanner.next_token()?;
        let mut array_of_tables = false;
        if first.id == TokenId::LeftBracket {
            // an array of tables header requires both brackets side by side
            if first.line != lbracket.line || first.col != lbracket.col + 1 {
                return Err(toml_err!(ErrorKind::UnexpectedToken, first.line, first.col,
                                     String::from("key"), TokenId::LeftBracket.to_string()))
            }
            array_of_tables = true;
            first = self.scanner.next_token()?;
        }
        let key = self.key(first, TokenId::RightBracket)?;
        if array_of_tables {
            let rbracket = self.scanner.next_token()?;
            if rbracket.id != TokenId::RightBracket {
                return Err(self.unexpected(&rbracket, TokenId::RightBracket.to_string()))
            }
        }
        trace!("header selects {} (array of tables: {})", key, array_of_tables);
        document.select_header(&key, array_of_tables)?;
        self.expect_line_end()
    }

    /// Parses a key-value pair (`<key> = <value>`).
    /// The first token of the key has already been consumed; the caller decides whether a
    /// line break must follow.
    ///
    /// # Arguments
    /// * `first` - the consumed first token of the key
    fn key_value_pair(&mut self, first: Token) -> Result<(TomlKey, TomlItem), TomlError> {
        let key = self.key(first, TokenId::Equal)?;
        let item = self.value()?;
        Ok((key, item))
    }

    /// Parses a key, simple or dotted, up to and including the terminating token.
    ///
    /// # Arguments
    /// * `first` - the consumed first token of the key
    /// * `terminator` - the token that must follow the key
    fn key(&mut self, first: Token, terminator: TokenId) -> Result<TomlKey, TomlError> {
        let first_part = match first.key_text() {
            Some(text) => text.to_string(),
            None => return Err(self.unexpected(&first, String::from("key")))
        };
        let mut parts = vec![first_part];
        let mut after_dot = false;
        loop {
            let token = self.scanner.next_token()?;
            match token.id {
                TokenId::Dot => {
                    if after_dot {
                        return Err(self.unexpected(&token, String::from("key")))
                    }
                    after_dot = true;
                },
                TokenId::Newline => {
                    return Err(toml_err!(ErrorKind::UnexpectedToken, token.line, token.col,
                                         terminator.to_string(), TokenId::Newline.to_string()))
                },
                TokenId::EndOfInput => {
                    return Err(toml_err!(ErrorKind::UnexpectedEof, token.line, token.col,
                                         terminator.to_string()))
                },
                _ => {
                    if token.id == terminator {
                        if after_dot {
                            return Err(self.unexpected(&token, String::from("key")))
                        }
                        break
                    }
                    match token.key_text() {
                        Some(text) if after_dot => {
                            parts.push(text.to_string());
                            after_dot = false;
                        },
                        _ => return Err(self.unexpected(&token, terminator.to_string()))
                    }
                }
            }
        }
        Ok(TomlKey::from_parts(parts, first.line, first.col))
    }

    /// Parses a TOML value, i.e. the right hand side of a key-value pair.
    fn value(&mut self) -> Result<TomlItem, TomlError> {
        let token = self.scanner.next_token()?;
        self.value_from(token)
    }

    /// Converts the given token into a TOML value item, descending into arrays and
    /// inline tables.
    ///
    /// # Arguments
    /// * `token` - the consumed first token of the value
    fn value_from(&mut self, token: Token) -> Result<TomlItem, TomlError> {
        match token.id {
            TokenId::String => decode_string(&token),
            TokenId::Integer => decode_integer(&token),
            TokenId::Float => decode_float(&token),
            TokenId::Boolean => {
                Ok(TomlItem::new(TomlValue::Boolean(token.text == "true"), token.line))
            },
            TokenId::Datetime => decode_datetime(&token),
            TokenId::LeftBracket => self.array(&token),
            TokenId::LeftBrace => self.inline_table(&token),
            TokenId::Identifier => {
                Err(toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                              format!("{} is not a valid TOML value", quoted(&token.text))))
            },
            TokenId::EndOfInput => {
                Err(toml_err!(ErrorKind::UnexpectedEof, token.line, token.col,
                              String::from("value")))
            },
            _ => Err(self.unexpected(&token, String::from("value")))
        }
    }

    /// Parses an array value. The opening bracket has already been consumed.
    /// Line breaks are skipped before and after values and separators, a single trailing
    /// comma is permitted and elements may be of heterogeneous type.
    fn array(&mut self, lbracket: &Token) -> Result<TomlItem, TomlError> {
        let mut array_item = TomlItem::new_array(lbracket.line, ItemState::Closed);
        let mut after_value = false;
        loop {
            let token = self.scanner.next_token()?;
            match token.id {
                TokenId::Newline => (),
                TokenId::RightBracket => break,
                TokenId::Comma => {
                    if ! after_value {
                        return Err(self.unexpected(&token, String::from("value")))
                    }
                    after_value = false;
                },
                TokenId::EndOfInput => {
                    return Err(toml_err!(ErrorKind::UnexpectedEof, lbracket.line, lbracket.col,
                                         TokenId::RightBracket.to_string()))
                },
                _ => {
                    if after_value {
                        return Err(self.unexpected(&token, TokenId::Comma.to_string()))
                    }
                    let element = self.value_from(token)?;
                    array_item.push(element);
                    after_value = true;
                }
            }
        }
        Ok(array_item)
    }

    /// Parses an inline table value. The opening brace has already been consumed.
    /// Inline tables must fit on a single line, a trailing comma is not permitted and the
    /// resulting table is closed against later extension.
    fn inline_table(&mut self, lbrace: &Token) -> Result<TomlItem, TomlError> {
        let mut table_item = TomlItem::new_table(lbrace.line, ItemState::Implicit);
        let mut after_value = false;
        let mut after_comma = false;
        loop {
            let token = self.scanner.next_token()?;
            match token.id {
                TokenId::RightBrace => {
                    if after_comma {
                        return Err(self.unexpected(&token, String::from("key")))
                    }
                    break
                },
                TokenId::Comma => {
                    if ! after_value {
                        return Err(self.unexpected(&token, String::from("key")))
                    }
                    after_value = false;
                    after_comma = true;
                },
                TokenId::Newline => {
                    return Err(toml_err!(ErrorKind::UnexpectedToken, token.line, token.col,
                                         TokenId::RightBrace.to_string(),
                                         TokenId::Newline.to_string()))
                },
                TokenId::EndOfInput => {
                    return Err(toml_err!(ErrorKind::UnexpectedEof, lbrace.line, lbrace.col,
                                         TokenId::RightBrace.to_string()))
                },
                _ => {
                    if after_value {
                        return Err(self.unexpected(&token, TokenId::Comma.to_string()))
                    }
                    let (key, item) = self.key_value_pair(token)?;
                    insert_into(&mut table_item, &None, &key, item)?;
                    after_value = true;
                    after_comma = false;
                }
            }
        }
        table_item.close();
        Ok(table_item)
    }

    /// Consumes the next token and verifies it terminates the current line.
    fn expect_line_end(&mut self) -> Result<(), TomlError> {
        let token = self.scanner.next_token()?;
        match token.id {
            TokenId::Newline | TokenId::EndOfInput => Ok(()),
            _ => Err(self.unexpected(&token, TokenId::Newline.to_string()))
        }
    }

    /// Creates an unexpected-token error for the given token.
    fn unexpected(&self, token: &Token, expected: String) -> TomlError {
        toml_err!(ErrorKind::UnexpectedToken, token.line, token.col,
                  expected, token.id.to_string())
    }
}

/// Derives a fix suggestion from the expected/received token pair of the given error.
/// Only a small fixed set of common mistakes yields a hint.
fn derive_hint(error: &TomlError) -> Option<String> {
    if error.kind() != ErrorKind::UnexpectedToken { return None }
    let args = error.args().as_ref()?;
    if args.len() < 2 { return None }
    match (args[0].as_str(), args[1].as_str()) {
        ("'='", "identifier") => {
            Some(String::from("Did you mean to use a dot '.' for a nested key?"))
        },
        ("value", "line break") => {
            Some(String::from("A value must follow '=' on the same line."))
        },
        ("line break", _) => {
            Some(String::from("Each key-value pair must end with a line break."))
        },
        ("'}'", "line break") => {
            Some(String::from("Inline tables must fit on a single line."))
        },
        ("key", "'['") => {
            Some(String::from("Array-of-tables brackets must be written side by side."))
        },
        _ => None
    }
}

/// Decodes a string token into a TOML value item.
/// Strips nothing but the logic the scanner left open: the first line break of multiline
/// forms is removed and escape sequences of basic forms are decoded.
fn decode_string(token: &Token) -> Result<TomlItem, TomlError> {
    let kind = token.string_kind.expect("string token without kind");
    let decoded = match kind {
        StringKind::Literal => token.text.clone(),
        StringKind::MultilineLiteral => strip_first_newline(&token.text).to_string(),
        StringKind::Basic => unescape(&token.text, false, token)?,
        StringKind::MultilineBasic => {
            unescape(strip_first_newline(&token.text), true, token)?
        }
    };
    Ok(TomlItem::new(TomlValue::String(decoded), token.line))
}

/// Removes one line break immediately following the opening delimiter of a multiline
/// string.
fn strip_first_newline(text: &str) -> &str {
    text.strip_prefix('\n').unwrap_or(text)
}

/// Decodes the escape sequences of a basic string.
/// In multiline strings a backslash directly before a line break consumes the break and
/// all subsequent ASCII whitespace.
///
/// # Arguments
/// * `raw` - the raw string contents between the delimiters
/// * `multiline` - indicates whether line ending escapes are permitted
/// * `token` - the string token, used for error positions
fn unescape(raw: &str, multiline: bool, token: &Token) -> Result<String, TomlError> {
    let mut res = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            res.push(ch);
            continue;
        }
        match chars.next() {
            Some('b') => res.push('\u{0008}'),
            Some('t') => res.push('\t'),
            Some('n') => res.push('\n'),
            Some('f') => res.push('\u{000c}'),
            Some('r') => res.push('\r'),
            Some('"') => res.push('"'),
            Some('\\') => res.push('\\'),
            Some('u') => res.push(unicode_escape(&mut chars, 4, token)?),
            Some('U') => res.push(unicode_escape(&mut chars, 8, token)?),
            Some(c) if multiline && (c == '\n' || c == ' ' || c == '\t') => {
                // line ending backslash, swallow the break and all following whitespace
                while matches!(chars.peek(), Some(' ') | Some('\t') | Some('\n') | Some('\r')) {
                    chars.next();
                }
            },
            Some(c) => {
                return Err(toml_err!(ErrorKind::InvalidEscape, token.line, token.col,
                                     format!("\"\\{}\"", c)))
            },
            None => {
                return Err(toml_err!(ErrorKind::InvalidEscape, token.line, token.col,
                                     String::from("\"\\\"")))
            }
        }
    }
    Ok(res)
}

/// Decodes a unicode escape of the given number of hex digits into a character.
fn unicode_escape(chars: &mut std::iter::Peekable<std::str::Chars>, count: usize,
                  token: &Token) -> Result<char, TomlError> {
    let mut value: u32 = 0;
    let mut digits = String::with_capacity(count);
    for _ in 0 .. count {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(c);
                value = (value << 4) + c.to_digit(16).unwrap();
            },
            _ => {
                return Err(toml_err!(ErrorKind::InvalidEscape, token.line, token.col,
                                     format!("\"\\u{}\"", digits)))
            }
        }
    }
    char::from_u32(value).ok_or_else(|| {
        toml_err!(ErrorKind::InvalidEscape, token.line, token.col,
                  format!("\"\\u{}\"", digits))
    })
}

/// Decodes an integer token into a TOML value item.
/// Enforces the underscore discipline, rejects radix prefixes and leading zeros and
/// parses the remainder as base 10 signed 64 bit value.
fn decode_integer(token: &Token) -> Result<TomlItem, TomlError> {
    let text = &token.text;
    let unsigned = text.trim_start_matches(['+', '-']);
    if unsigned.starts_with("0x") || unsigned.starts_with("0o") || unsigned.starts_with("0b") {
        return Err(toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                             format!("radix prefixed integer {} is not supported",
                                     quoted(text))))
    }
    check_underscores(text, token)?;
    if unsigned.len() > 1 && unsigned.starts_with('0') {
        return Err(toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                             format!("integer {} has a leading zero", quoted(text))))
    }
    let plain: String = text.chars().filter(|c| *c != '_').collect();
    let plain = plain.strip_prefix('+').unwrap_or(&plain);
    match plain.parse::<i64>() {
        Ok(val) => Ok(TomlItem::new(TomlValue::Integer(val), token.line)),
        Err(_) => Err(toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                                format!("integer {} is out of range", quoted(text))))
    }
}

/// Decodes a float token into a TOML value item.
/// The symbolic forms inf and nan are recognized before numeric parsing.
fn decode_float(token: &Token) -> Result<TomlItem, TomlError> {
    let text = &token.text;
    let val = match text.as_str() {
        "inf" | "+inf" => Some(f64::infinity()),
        "-inf" => Some(f64::neg_infinity()),
        "nan" | "+nan" => Some(f64::nan()),
        "-nan" => Some(f64::from_bits(f64::nan().to_bits() | 0x8000000000000000)),
        _ => None
    };
    if let Some(v) = val {
        return Ok(TomlItem::new(TomlValue::Float(v), token.line))
    }
    check_underscores(text, token)?;
    let int_part_len = text.find(['.', 'e', 'E']).unwrap_or(text.len());
    let int_part = text[.. int_part_len].trim_start_matches(['+', '-']);
    if int_part.len() > 1 && int_part.starts_with('0') {
        return Err(toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                             format!("float {} has a leading zero", quoted(text))))
    }
    let plain: String = text.chars().filter(|c| *c != '_').collect();
    let plain = plain.strip_prefix('+').unwrap_or(&plain);
    match plain.parse::<f64>() {
        Ok(val) => Ok(TomlItem::new(TomlValue::Float(val), token.line)),
        Err(_) => Err(toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                                format!("float {} is out of range", quoted(text))))
    }
}

/// Verifies that every underscore in the given numeric lexeme is embedded between two
/// decimal digits.
fn check_underscores(text: &str, token: &Token) -> Result<(), TomlError> {
    let chars: Vec<char> = text.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if *ch != '_' { continue }
        let prev_ok = i > 0 && chars[i - 1].is_ascii_digit();
        let next_ok = i + 1 < chars.len() && chars[i + 1].is_ascii_digit();
        if ! prev_ok || ! next_ok {
            return Err(toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                                 format!("misplaced underscore in {}", quoted(text))))
        }
    }
    Ok(())
}

/// Decodes a date-time token into a TOML value item.
/// A ten character lexeme without time component becomes a local date, a lexeme starting
/// with a time shape becomes a local time, everything else a local or offset date-time
/// depending on the presence of a timezone suffix. All field ranges are validated.
fn decode_datetime(token: &Token) -> Result<TomlItem, TomlError> {
    let text = truncate_fraction(&token.text);
    let invalid = |_e: ParseError| {
        toml_err!(ErrorKind::InvalidValue, token.line, token.col,
                  format!("{} is not a valid date or time", quoted(&token.text)))
    };
    let value = if text.len() >= 8 && text.as_bytes()[2] == b':' {
        // no date part
        TomlValue::LocalTime(to_naive_time(&text).map_err(invalid)?)
    } else if text.len() == 10 {
        TomlValue::LocalDate(NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(invalid)?)
    } else if has_offset_suffix(&text) {
        TomlValue::OffsetDateTime(to_offset_datetime(&text).map_err(invalid)?)
    } else {
        TomlValue::LocalDateTime(to_naive_datetime(&text).map_err(invalid)?)
    };
    Ok(TomlItem::new(value, token.line))
}

/// Truncates fractional seconds beyond nanosecond precision.
fn truncate_fraction(text: &str) -> String {
    let dot = match text.find('.') {
        Some(i) => i,
        None => return text.to_string()
    };
    let fract_len = text[dot + 1 ..].chars().take_while(|c| c.is_ascii_digit()).count();
    if fract_len <= 9 { return text.to_string() }
    let mut res = String::with_capacity(text.len());
    res.push_str(&text[.. dot + 10]);
    res.push_str(&text[dot + 1 + fract_len ..]);
    res
}

/// Indicates whether the given date-time lexeme carries a timezone suffix.
fn has_offset_suffix(text: &str) -> bool {
    if text.ends_with('Z') || text.ends_with('z') { return true }
    // a sign within the time portion starts an offset, the date dashes end at index 9
    text[10 ..].contains('+') || text[10 ..].contains('-')
}

/// Converts the given lexeme to a naive time value.
fn to_naive_time(val: &str) -> Result<NaiveTime, ParseError> {
    if val.contains('.') { return NaiveTime::parse_from_str(val, "%T%.f") }
    NaiveTime::parse_from_str(val, "%T")
}

/// Converts the given lexeme to a naive date-time value.
/// The separator between date and time may be 'T', 't' or a space and is copied into the
/// format string verbatim.
fn to_naive_datetime(val: &str) -> Result<NaiveDateTime, ParseError> {
    let mut fmt_str = String::with_capacity(32);
    fmt_str.push_str("%F");
    fmt_str.push(val.chars().nth(10).unwrap());
    fmt_str.push_str("%T");
    if val.contains('.') { fmt_str.push_str("%.f"); }
    NaiveDateTime::parse_from_str(val, &fmt_str)
}

/// Converts the given lexeme to an offset date-time value.
/// The suffixes 'Z' and 'z' denote an offset of zero minutes.
fn to_offset_datetime(val: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let mut fmt_str = String::with_capacity(32);
    fmt_str.push_str("%F");
    fmt_str.push(val.chars().nth(10).unwrap());
    fmt_str.push_str("%T");
    if val.contains('.') { fmt_str.push_str("%.f"); }
    fmt_str.push_str("%:z");
    if val.ends_with('Z') || val.ends_with('z') {
        let mut val_str = val.to_string();
        val_str.pop();
        val_str.push_str("+00:00");
        return DateTime::parse_from_str(&val_str, &fmt_str)
    }
    DateTime::parse_from_str(val, &fmt_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{get_array, get_float, get_int, get_path, get_string, get_table};

    fn parse_ok(data: &str) -> TomlDocument {
        TomlParser::new(data).parse().expect("parse failure")
    }

    fn parse_err(data: &str) -> TomlError {
        TomlParser::new(data).parse().expect_err("expected parse failure")
    }

    #[test]
    fn empty_documents() {
        assert!(parse_ok("").root_table().is_empty());
        assert!(parse_ok("   \n\t\n").root_table().is_empty());
        assert!(parse_ok("# comments\n# only\n").root_table().is_empty());
    }

    #[test]
    fn simple_key_value() {
        let doc = parse_ok("name = \"test\"\n");
        assert_eq!(get_string(doc.root_table(), "name"), Some("test"));
    }

    #[test]
    fn quoted_and_keyword_keys() {
        let doc = parse_ok("\"my key\" = 1\n'other.key' = 2\ntrue = 3\n1234 = 4\n");
        assert_eq!(get_int(doc.root_table(), "my key"), Some(1));
        assert_eq!(get_int(doc.root_table(), "other.key"), Some(2));
        assert_eq!(get_int(doc.root_table(), "true"), Some(3));
        assert_eq!(get_int(doc.root_table(), "1234"), Some(4));
    }

    #[test]
    fn dotted_keys_build_tables() {
        let doc = parse_ok("a.b.c = 42\na.d = true\n");
        assert_eq!(get_path(doc.root_table(), "a.b.c").unwrap().value().as_integer(),
                   Some(42));
        assert_eq!(get_path(doc.root_table(), "a.d").unwrap().value().as_bool(), Some(true));
    }

    #[test]
    fn basic_string_escapes_decoded() {
        let doc = parse_ok("s = \"col\\tumn\\nline \\u00E9 \\U0001F600 q\\\"\"\n");
        assert_eq!(get_string(doc.root_table(), "s"),
                   Some("col\tumn\nline \u{e9} \u{1F600} q\""));
    }

    #[test]
    fn literal_string_not_decoded() {
        let doc = parse_ok("s = 'a\\tb'\n");
        assert_eq!(get_string(doc.root_table(), "s"), Some("a\\tb"));
    }

    #[test]
    fn multiline_first_newline_stripped() {
        let doc = parse_ok("s = \"\"\"\nfirst\nsecond\"\"\"\n");
        assert_eq!(get_string(doc.root_table(), "s"), Some("first\nsecond"));
        let doc = parse_ok("s = '''\nverbatim'''\n");
        assert_eq!(get_string(doc.root_table(), "s"), Some("verbatim"));
    }

    #[test]
    fn multiline_line_ending_backslash() {
        let doc = parse_ok(concat!("text = \"\"\"\n",
                                   "The quick brown \\\n",
                                   "    fox jumps over \\\n",
                                   "    the lazy dog.\"\"\"\n"));
        assert_eq!(get_string(doc.root_table(), "text"),
                   Some("The quick brown fox jumps over the lazy dog."));
    }

    #[test]
    fn surrogate_escape_rejected() {
        let err = parse_err("s = \"\\uD800\"\n");
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
    }

    #[test]
    fn integer_decoding() {
        let doc = parse_ok("a = 42\nb = -17\nc = +8\nd = 1_000_000\ne = 0\nf = -0\n");
        assert_eq!(get_int(doc.root_table(), "a"), Some(42));
        assert_eq!(get_int(doc.root_table(), "b"), Some(-17));
        assert_eq!(get_int(doc.root_table(), "c"), Some(8));
        assert_eq!(get_int(doc.root_table(), "d"), Some(1000000));
        assert_eq!(get_int(doc.root_table(), "e"), Some(0));
        assert_eq!(get_int(doc.root_table(), "f"), Some(0));
    }

    #[test]
    fn integer_boundaries() {
        let doc = parse_ok("max = 9223372036854775807\nmin = -9223372036854775808\n");
        assert_eq!(get_int(doc.root_table(), "max"), Some(i64::MAX));
        assert_eq!(get_int(doc.root_table(), "min"), Some(i64::MIN));
        assert_eq!(parse_err("v = 9223372036854775808\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("v = -9223372036854775809\n").kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn leading_zero_rejected() {
        let err = parse_err("num = 007\n");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn consecutive_underscores_rejected() {
        let err = parse_err("num = 1__2\n");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn misplaced_underscores_rejected() {
        assert_eq!(parse_err("v = 1_\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("v = 1_.2\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("v = 1._2\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("v = 1_e2\n").kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn radix_integers_rejected() {
        assert_eq!(parse_err("v = 0x1F\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("v = 0o755\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("v = 0b11\n").kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn float_decoding() {
        let doc = parse_ok("a = 3.14\nb = -0.0\nc = 6.02e23\nd = 1e-2\ne = 0.0\n");
        assert_eq!(get_float(doc.root_table(), "a"), Some(3.14));
        assert_eq!(get_float(doc.root_table(), "b"), Some(0.0));
        assert_eq!(get_float(doc.root_table(), "c"), Some(6.02e23));
        assert_eq!(get_float(doc.root_table(), "d"), Some(0.01));
        assert_eq!(get_float(doc.root_table(), "e"), Some(0.0));
    }

    #[test]
    fn symbolic_floats() {
        let doc = parse_ok("a = inf\nb = -inf\nc = nan\nd = -nan\ne = +inf\n");
        assert_eq!(get_float(doc.root_table(), "a"), Some(f64::INFINITY));
        assert_eq!(get_float(doc.root_table(), "b"), Some(f64::NEG_INFINITY));
        assert!(get_float(doc.root_table(), "c").unwrap().is_nan());
        let d = get_float(doc.root_table(), "d").unwrap();
        assert!(d.is_nan() && d.is_sign_negative());
        assert_eq!(get_float(doc.root_table(), "e"), Some(f64::INFINITY));
    }

    #[test]
    fn offset_datetime_fields() {
        let doc = parse_ok("dt = 1979-05-27T00:32:00-07:00\n");
        let dt = doc.root_table().get("dt").unwrap().value()
                    .as_offset_datetime().copied().unwrap();
        use chrono::{Datelike, Offset, Timelike};
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
    fn datetime_classification() {
        let doc = parse_ok(concat!("odt = 1979-05-27T07:32:00Z\n",
                                   "ldt = 1979-05-27T07:32:00\n",
                                   "ld = 1979-05-27\n",
                                   "lt = 07:32:00\n"));
        let t = doc.root_table();
        assert!(t.get("odt").unwrap().value().as_offset_datetime().is_some());
        assert!(t.get("ldt").unwrap().value().as_local_datetime().is_some());
        assert!(t.get("ld").unwrap().value().as_local_date().is_some());
        assert!(t.get("lt").unwrap().value().as_local_time().is_some());
    }

    #[test]
    fn fractional_seconds_scaled_and_truncated() {
        use chrono::Timelike;
        let doc = parse_ok("t = 07:32:00.123\nu = 07:32:00.1234567899\n");
        let t = doc.root_table().get("t").unwrap().value().as_local_time().copied().unwrap();
        assert_eq!(t.nanosecond(), 123_000_000);
        let u = doc.root_table().get("u").unwrap().value().as_local_time().copied().unwrap();
        assert_eq!(u.nanosecond(), 123_456_789);
    }

    #[test]
    fn calendar_ranges_validated() {
        assert_eq!(parse_err("d = 1979-13-01\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("d = 1979-02-30\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("t = 25:00:00\n").kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_err("t = 07:61:00\n").kind(), ErrorKind::InvalidValue);
        // february 29 is accepted
        let doc = parse_ok("d = 2024-02-29\n");
        assert!(doc.root_table().get("d").unwrap().value().as_local_date().is_some());
    }

    #[test]
    fn arrays_heterogeneous_with_trailing_comma() {
        let doc = parse_ok("a = [1, \"two\", 3.0, [true],]\n");
        let arr = get_array(doc.root_table(), "a").unwrap();
        assert_eq!(arr.len(), 4);
        assert_eq!(arr[0].value().as_integer(), Some(1));
        assert_eq!(arr[1].value().as_str(), Some("two"));
        assert_eq!(arr[2].value().as_float(), Some(3.0));
        assert_eq!(arr[3].value().as_array().unwrap()[0].value().as_bool(), Some(true));
    }

    #[test]
    fn arrays_span_lines() {
        let doc = parse_ok("a = [\n  1,\n  2,\n]\n");
        assert_eq!(get_array(doc.root_table(), "a").unwrap().len(), 2);
    }

    #[test]
    fn array_separator_discipline() {
        assert_eq!(parse_err("a = [1 2]\n").kind(), ErrorKind::UnexpectedToken);
        assert_eq!(parse_err("a = [,1]\n").kind(), ErrorKind::UnexpectedToken);
        assert_eq!(parse_err("a = [1,,2]\n").kind(), ErrorKind::UnexpectedToken);
        assert_eq!(parse_err("a = [1, 2\n").kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn inline_tables() {
        let doc = parse_ok("point = { x = 1, y = 2 }\nnested = { a.b = 3 }\n");
        let point = get_table(doc.root_table(), "point").unwrap();
        assert_eq!(get_int(point, "x"), Some(1));
        assert_eq!(get_int(point, "y"), Some(2));
        let nested = get_table(doc.root_table(), "nested").unwrap();
        assert_eq!(get_path(nested, "a.b").unwrap().value().as_integer(), Some(3));
    }

    #[test]
    fn inline_table_rejects_newline_and_trailing_comma() {
        assert_eq!(parse_err("t = { a = 1,\nb = 2 }\n").kind(), ErrorKind::UnexpectedToken);
        assert_eq!(parse_err("t = { a = 1, }\n").kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn inline_table_is_closed() {
        let err = parse_err("t = { a = 1 }\n[t.b]\n");
        assert_eq!(err.kind(), ErrorKind::InvalidTable);
    }

    #[test]
    fn table_headers() {
        let doc = parse_ok("[server]\nhost = \"localhost\"\n[server.limits]\nmax = 10\n");
        let server = get_table(doc.root_table(), "server").unwrap();
        assert_eq!(get_string(server, "host"), Some("localhost"));
        let limits = get_table(server, "limits").unwrap();
        assert_eq!(get_int(limits, "max"), Some(10));
    }

    #[test]
    fn array_of_tables() {
        let doc = parse_ok("[[products]]\nname = \"Hammer\"\n\n[[products]]\nname = \"Nail\"\n");
        let products = get_array(doc.root_table(), "products").unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(get_string(products[0].value().as_table().unwrap(), "name"),
                   Some("Hammer"));
        assert_eq!(get_string(products[1].value().as_table().unwrap(), "name"),
                   Some("Nail"));
    }

    #[test]
    fn split_array_header_brackets_rejected() {
        let err = parse_err("[ [products]]\nname = 1\n");
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn duplicate_keys_rejected() {
        assert_eq!(parse_err("a = 1\na = 2\n").kind(), ErrorKind::DuplicateKey);
        assert_eq!(parse_err("[t]\na = 1\n[t]\nb = 2\n").kind(), ErrorKind::InvalidTable);
        assert_eq!(parse_err("t = { a = 1, a = 2 }\n").kind(), ErrorKind::DuplicateKey);
    }

    #[test]
    fn garbage_after_value_rejected() {
        let err = parse_err("a = 1 2\n");
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn bare_word_value_rejected() {
        let err = parse_err("a = yes\n");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn missing_value_rejected() {
        let err = parse_err("a =\n");
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn context_for_unseparated_key_parts() {
        let outcome = TomlParser::new("a b = 1\n").parse_with_context();
        assert!(outcome.document.is_none());
        let ctx = outcome.error.unwrap();
        assert_eq!(ctx.line(), 1);
        assert_eq!(ctx.column(), 3);
        assert_eq!(ctx.source_line(), "a b = 1");
        assert_eq!(ctx.hint(), Some("Did you mean to use a dot '.' for a nested key?"));
    }

    #[test]
    fn context_on_success_is_empty() {
        let outcome = TomlParser::new("a = 1\n").parse_with_context();
        assert!(outcome.document.is_some());
        assert!(outcome.error.is_none());
    }
}
