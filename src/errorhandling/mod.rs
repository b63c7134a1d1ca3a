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

//! Error types for all parts of tomlproc.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Creates a parse error at the given source position.
/// Further arguments are substituted into the message template of the error kind.
#[macro_export]
macro_rules! toml_err {
    ($kind: expr, $line: expr, $col: expr) => {
        TomlError::new($kind, $line, $col)
    };
    ($kind: expr, $line: expr, $col: expr $(,$arg: expr)+) => {
        TomlError::with_args($kind, $line, $col, &[$($arg),+])
    };
}

lazy_static! {
    /// Singleton instance of the hash table with all message templates
    pub static ref TOML_MSG_TABLE: HashMap<String, String> = {
        let res = include_str!("messages_en.txt");
        parse_resource(res)
    };
}

/// Classification of all failures surfaced by the library core.
#[derive (Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Scanner encountered a character outside any lexeme
    UnexpectedCharacter,
    /// Malformed escape sequence inside a basic string
    InvalidEscape,
    /// End of input or bare line break inside a string
    UnterminatedString,
    /// Numeric lexeme is syntactically ill-formed
    NumberFormat,
    /// Semantic failure while decoding a value
    InvalidValue,
    /// Parser expected a different token class
    UnexpectedToken,
    /// Token stream ended in the middle of a production
    UnexpectedEof,
    /// A key is assigned twice within one table's scope
    DuplicateKey,
    /// Structural re-open of a closed table or type conflict along a dotted path
    InvalidTable,
    /// Reserved for structural array rule violations
    InvalidArray
}
impl ErrorKind {
    /// Returns the message table ID of this error kind.
    pub fn id(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedCharacter => "E-Toml-UnexpectedCharacter",
            ErrorKind::InvalidEscape => "E-Toml-InvalidEscape",
            ErrorKind::UnterminatedString => "E-Toml-UnterminatedString",
            ErrorKind::NumberFormat => "E-Toml-NumberFormat",
            ErrorKind::InvalidValue => "E-Toml-InvalidValue",
            ErrorKind::UnexpectedToken => "E-Toml-UnexpectedToken",
            ErrorKind::UnexpectedEof => "E-Toml-UnexpectedEof",
            ErrorKind::DuplicateKey => "E-Toml-DuplicateKey",
            ErrorKind::InvalidTable => "E-Toml-InvalidTable",
            ErrorKind::InvalidArray => "E-Toml-InvalidArray"
        }
    }
}
impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Failure raised by the scanner, the parser or the record binder.
/// Carries the source position of the offending token and the arguments needed to fill the
/// `%s` placeholders in the message template associated with the error kind.
#[derive (Clone, Debug)]
pub struct TomlError {
    // failure classification
    kind: ErrorKind,
    // line number in the source, 1 based
    line: usize,
    // column number of the first character of the offending token, 1 based
    column: usize,
    // argument values in case the message template contains placeholders
    args: Option<Vec<String>>
}
impl TomlError {
    /// Creates an error without message arguments.
    ///
    /// # Arguments
    /// * `kind` - the error kind
    /// * `line` - the line number in the source, 1 based
    /// * `column` - the column number of the offending token, 1 based
    #[inline]
    pub fn new(kind: ErrorKind, line: usize, column: usize) -> TomlError {
        TomlError { kind, line, column, args: None }
    }

    /// Creates an error with an arbitrary number of message arguments.
    ///
    /// # Arguments
    /// * `kind` - the error kind
    /// * `line` - the line number in the source, 1 based
    /// * `column` - the column number of the offending token, 1 based
    /// * `args` - the arguments
    pub fn with_args(kind: ErrorKind, line: usize, column: usize,
                     args: &[String]) -> TomlError {
        let mut v = Vec::<String>::new();
        v.extend(args.iter().map(|a| { (*a).to_string() }));
        TomlError { kind, line, column, args: Some(v) }
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind { self.kind }

    /// Returns the line number in the source, 1 based.
    #[inline]
    pub fn line(&self) -> usize { self.line }

    /// Returns the column number of the offending token, 1 based.
    #[inline]
    pub fn column(&self) -> usize { self.column }

    /// Returns the optional message argument values.
    #[inline]
    pub fn args(&self) -> &Option<Vec<String>> { &self.args }

    /// Returns the message with all placeholders substituted, without position information.
    pub fn message(&self) -> String {
        self.evaluate(&TOML_MSG_TABLE)
    }

    /// Returns the message prefixed with line and column information.
    pub fn full_message(&self) -> String {
        format!("Line {}, column {}: {}", self.line, self.column, self.message())
    }

    /// Substitutes the placeholder variables in the message template with their values.
    ///
    /// # Arguments
    /// * `templates` - the hash map with all message templates
    pub fn evaluate(&self, templates: &HashMap<String, String>) -> String {
        let kind_id = self.kind.id();
        let msg = match templates.get(kind_id) {
            Some(m) => m,
            None => return kind_id.to_string()
        };
        if self.args.is_none() { return msg.to_string() }
        let pars = self.args.as_ref().unwrap();
        let par_count = pars.len();
        let mut res = String::with_capacity(160);
        let mut expect_var = false;
        let mut par_index = 0;
        for c in msg.chars() {
            if expect_var {
                if c == 's' {
                    if par_index < par_count {
                        res.push_str(pars.get(par_index).unwrap());
                        par_index += 1;
                    }
                } else {
                    if c != '%' { res.push('%'); }
                    res.push(c);
                }
                expect_var = false;
                continue;
            }
            if c == '%' {
                expect_var = true;
                continue;
            }
            res.push(c);
        }
        res
    }
}
impl fmt::Display for TomlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_message())
    }
}
impl std::error::Error for TomlError {}

/// Structured description of the most recent parse failure.
/// Holds everything needed to render a caret diagnostic: position, the full text of the
/// offending source line, the evaluated message and an optional hint.
#[derive (Clone, Debug)]
pub struct ErrorContext {
    // line number in the source, 1 based
    line: usize,
    // column number of the first character of the offending token, 1 based
    column: usize,
    // full text of the offending source line, without line terminator
    source_line: String,
    // evaluated one line message
    message: String,
    // optional one line suggestion derived from the expected/received token pair
    hint: Option<String>
}
impl ErrorContext {
    /// Creates an error context.
    ///
    /// # Arguments
    /// * `error` - the underlying parse error
    /// * `source_line` - the full text of the offending source line
    /// * `hint` - an optional suggestion how to fix the problem
    pub fn new(error: &TomlError, source_line: &str, hint: Option<String>) -> ErrorContext {
        ErrorContext {
            line: error.line(),
            column: error.column(),
            source_line: source_line.to_string(),
            message: error.message(),
            hint
        }
    }

    /// Returns the line number in the source, 1 based.
    #[inline]
    pub fn line(&self) -> usize { self.line }

    /// Returns the column number of the offending token, 1 based.
    #[inline]
    pub fn column(&self) -> usize { self.column }

    /// Returns the full text of the offending source line.
    #[inline]
    pub fn source_line(&self) -> &str { &self.source_line }

    /// Returns the one line failure message.
    #[inline]
    pub fn message(&self) -> &str { &self.message }

    /// Returns the optional suggestion how to fix the problem.
    #[inline]
    pub fn hint(&self) -> Option<&str> { self.hint.as_deref() }

    /// Renders the context as a multi line diagnostic:
    /// position header, the source line, a caret under the offending column, the message
    /// and the hint, if any.
    pub fn render(&self) -> String {
        let mut res = String::with_capacity(160);
        res.push_str(&format!("Error at line {}, column {}:\n", self.line, self.column));
        res.push_str(&self.source_line);
        res.push('\n');
        for _ in 1 .. self.column { res.push(' '); }
        res.push_str("^\n");
        res.push_str(&self.message);
        res.push('\n');
        if let Some(h) = &self.hint {
            res.push_str("Hint: ");
            res.push_str(h);
            res.push('\n');
        }
        res
    }
}
impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Fills the message template table from the embedded resource file.
/// Lines starting with a hash character and blank lines are ignored; every other line holds
/// a message ID followed by whitespace and the template text.
///
/// # Arguments
/// * `contents` - the contents of the resource file
fn parse_resource(contents: &str) -> HashMap<String, String> {
    let mut t = HashMap::<String, String>::new();
    let ignore_pattern = Regex::new(r"^\s*#.*").unwrap();
    let def_pattern = Regex::new(r"^([\w\d_\-]+)\s+(.*)$").unwrap();
    for line in contents.split('\n') {
        let line = line.trim();
        if line.is_empty() || ignore_pattern.is_match(line) {
            continue;
        }
        if let Some(groups) = def_pattern.captures(line) {
            let id = groups.get(1).unwrap().as_str();
            let text = groups.get(2).unwrap().as_str();
            t.insert(id.to_string(), text.to_string());
        }
    }
    t
}
