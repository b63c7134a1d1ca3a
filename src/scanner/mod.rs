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

//! Lexical analyzer for TOML formatted strings.
//! The scanner performs a single forward pass over the input with one character lookahead
//! and a fixed width peek for date/time disambiguation. Horizontal whitespace and comments
//! are skipped silently, line breaks are emitted as explicit tokens.

mod datetimes;
mod numbers;
mod strings;

use std::fmt;
use crate::errorhandling::*;
use crate::toml_err;

pub(crate) const TAB: char = '\t';
pub(crate) const LINE_FEED: char = '\n';
pub(crate) const SPACE: char = ' ';

/// Lexical TOML tokens
#[derive (Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TokenId {
    Identifier,
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    Equal,
    Comma,
    Dot,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Newline,
    EndOfInput
}
impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenId::Identifier => write!(f, "identifier"),
            TokenId::String => write!(f, "string"),
            TokenId::Integer => write!(f, "integer"),
            TokenId::Float => write!(f, "float"),
            TokenId::Boolean => write!(f, "boolean"),
            TokenId::Datetime => write!(f, "date-time"),
            TokenId::Equal => write!(f, "'='"),
            TokenId::Comma => write!(f, "','"),
            TokenId::Dot => write!(f, "'.'"),
            TokenId::LeftBracket => write!(f, "'['"),
            TokenId::RightBracket => write!(f, "']'"),
            TokenId::LeftBrace => write!(f, "'{{'"),
            TokenId::RightBrace => write!(f, "'}}'"),
            TokenId::Newline => write!(f, "line break"),
            TokenId::EndOfInput => write!(f, "end of input")
        }
    }
}

/// The four syntactic TOML string forms
#[derive (Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StringKind {
    Basic,
    MultilineBasic,
    Literal,
    MultilineLiteral
}

/// One lexical unit of a TOML source.
/// For string tokens the text holds the raw contents without the surrounding delimiters,
/// escape sequences are not decoded. For all other tokens the text is the full lexeme.
#[derive (Clone, Debug)]
pub(crate) struct Token {
    pub(crate) id: TokenId,
    pub(crate) text: String,
    pub(crate) string_kind: Option<StringKind>,
    pub(crate) line: usize,
    pub(crate) col: usize
}
impl Token {
    fn new(id: TokenId, text: String, line: usize, col: usize) -> Token {
        Token { id, text, string_kind: None, line, col }
    }

    /// Returns the token text, if this token may serve as one part of a key.
    /// Quoted single line strings are always accepted. Identifiers, booleans, the symbolic
    /// floats and plain digit sequences qualify when their lexeme consists of bare key
    /// characters only.
    pub(crate) fn key_text(&self) -> Option<&str> {
        match self.id {
            TokenId::Identifier => Some(&self.text),
            TokenId::String => {
                match self.string_kind {
                    Some(StringKind::Basic) | Some(StringKind::Literal) => Some(&self.text),
                    _ => None
                }
            },
            TokenId::Boolean | TokenId::Integer | TokenId::Float | TokenId::Datetime => {
                if ! self.text.is_empty()
                   && self.text.chars().all(|c| c.is_ascii_alphanumeric()
                                                || c == '_' || c == '-') {
                    Some(&self.text)
                } else {
                    None
                }
            },
            _ => None
        }
    }
}

/// TOML scanner.
/// Separates a TOML formatted string into a stream of tokens.
pub(crate) struct TomlScanner {
    // TOML formatted character sequence, CR/LF pairs normalized to plain line feeds
    data: Vec<char>,
    // index of next character in input sequence, starting with 0
    current_index: usize,
    // line number of next character, 1 based
    line_nr: usize,
    // column number of next character, 1 based
    col_nr: usize,
    // position where the current token begins
    token_line: usize,
    token_col: usize
}
impl TomlScanner {
    /// Creates a scanner for the given TOML string.
    ///
    /// # Arguments
    /// * `data` - the string containing the input data to scan
    pub(crate) fn new(data: &str) -> TomlScanner {
        let vdata: Vec<char> = data.replace("\r\n", "\n").chars().collect();
        TomlScanner {
            data: vdata,
            current_index: 0,
            line_nr: 1,
            col_nr: 1,
            token_line: 1,
            token_col: 1
        }
    }

    /// Returns the number of lines in the input.
    pub(crate) fn source_line_count(&self) -> usize {
        self.data.iter().filter(|c| **c == LINE_FEED).count() + 1
    }

    /// Returns the full text of the given source line, without line terminator.
    /// Needed for error diagnostics.
    ///
    /// # Arguments
    /// * `line_nr` - the line number, 1 based
    pub(crate) fn source_line(&self, line_nr: usize) -> String {
        let mut res = String::with_capacity(80);
        let mut current_line = 1;
        for ch in &self.data {
            if *ch == LINE_FEED {
                if current_line == line_nr { break }
                current_line += 1;
                continue;
            }
            if current_line == line_nr { res.push(*ch); }
        }
        res
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub(super) fn peek(&self) -> Option<char> {
        self.data.get(self.current_index).copied()
    }

    /// Returns the character the given number of positions ahead without consuming anything.
    #[inline]
    pub(super) fn peek_at(&self, offset: usize) -> Option<char> {
        self.data.get(self.current_index + offset).copied()
    }

    /// Consumes and returns the next character, keeping line and column numbers current.
    pub(super) fn advance(&mut self) -> Option<char> {
        let ch = self.data.get(self.current_index).copied()?;
        self.current_index += 1;
        if ch == LINE_FEED {
            self.line_nr += 1;
            self.col_nr = 1;
        } else {
            self.col_nr += 1;
        }
        Some(ch)
    }

    /// Creates an error for an unexpected character at the current position.
    pub(super) fn char_error(&self, ch: char) -> TomlError {
        toml_err!(ErrorKind::UnexpectedCharacter, self.line_nr, self.col_nr,
                  printable_char(ch))
    }

    /// Returns the next lexical unit of the TOML formatted data.
    ///
    /// # Errors
    /// Returns a structure containing error information if the input violates the
    /// lexical rules of TOML
    pub(crate) fn next_token(&mut self) -> Result<Token, TomlError> {
        loop {
            // skip horizontal whitespace
            while matches!(self.peek(), Some(SPACE) | Some(TAB)) {
                self.advance();
            }
            self.token_line = self.line_nr;
            self.token_col = self.col_nr;
            let ch = match self.peek() {
                None => return Ok(Token::new(TokenId::EndOfInput, String::new(),
                                             self.token_line, self.token_col)),
                Some(c) => c
            };
            match ch {
                '#' => {
                    self.skip_comment()?;
                    continue;
                },
                LINE_FEED => {
                    self.advance();
                    return Ok(self.punctuation_token(TokenId::Newline, ""))
                },
                '=' => { self.advance();
                         return Ok(self.punctuation_token(TokenId::Equal, "=")) },
                ',' => { self.advance();
                         return Ok(self.punctuation_token(TokenId::Comma, ",")) },
                '.' => { self.advance();
                         return Ok(self.punctuation_token(TokenId::Dot, ".")) },
                '[' => { self.advance();
                         return Ok(self.punctuation_token(TokenId::LeftBracket, "[")) },
                ']' => { self.advance();
                         return Ok(self.punctuation_token(TokenId::RightBracket, "]")) },
                '{' => { self.advance();
                         return Ok(self.punctuation_token(TokenId::LeftBrace, "{")) },
                '}' => { self.advance();
                         return Ok(self.punctuation_token(TokenId::RightBrace, "}")) },
                '"' | '\'' => return self.scan_string(ch),
                'A' ..= 'Z' | 'a' ..= 'z' | '_' => return Ok(self.scan_identifier()),
                '+' | '-' => return self.scan_signed(),
                '0' ..= '9' => {
                    if self.looks_like_date() { return self.scan_datetime() }
                    if self.looks_like_time() { return self.scan_bare_time() }
                    return self.scan_number(String::new())
                },
                _ => {
                    let err = self.char_error(ch);
                    self.advance();
                    return Err(err)
                }
            }
        }
    }

    /// Creates a token for a punctuation lexeme beginning at the current token position.
    fn punctuation_token(&self, id: TokenId, text: &str) -> Token {
        Token::new(id, text.to_string(), self.token_line, self.token_col)
    }

    /// Creates a token for a value lexeme beginning at the current token position.
    pub(super) fn value_token(&self, id: TokenId, text: String) -> Token {
        Token::new(id, text, self.token_line, self.token_col)
    }

    /// Skips a comment up to, but not including, the terminating line break.
    /// Control characters other than tab are not permitted in comments.
    fn skip_comment(&mut self) -> Result<(), TomlError> {
        self.advance();
        while let Some(ch) = self.peek() {
            if ch == LINE_FEED { break }
            if is_forbidden_control(ch) {
                let err = self.char_error(ch);
                self.advance();
                return Err(err)
            }
            self.advance();
        }
        Ok(())
    }

    /// Scans an identifier: a maximal run of letters, digits, underscores and dashes.
    /// The literals true and false yield a boolean token, inf and nan a float token.
    fn scan_identifier(&mut self) -> Token {
        let mut text = String::with_capacity(16);
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                text.push(ch);
                self.advance();
            } else {
                break
            }
        }
        let id = match text.as_str() {
            "true" | "false" => TokenId::Boolean,
            "inf" | "nan" => TokenId::Float,
            _ => TokenId::Identifier
        };
        self.value_token(id, text)
    }

    /// Scans a lexeme introduced by a sign: the symbolic floats inf and nan, or a number.
    fn scan_signed(&mut self) -> Result<Token, TomlError> {
        let sign = self.advance().unwrap();
        let mut text = String::with_capacity(24);
        text.push(sign);
        match self.peek() {
            Some('i') | Some('n') => {
                let mut sym = String::with_capacity(4);
                while let Some(ch) = self.peek() {
                    if ch.is_ascii_alphabetic() {
                        sym.push(ch);
                        self.advance();
                    } else {
                        break
                    }
                }
                if sym == "inf" || sym == "nan" {
                    text.push_str(&sym);
                    return Ok(self.value_token(TokenId::Float, text))
                }
                Err(toml_err!(ErrorKind::NumberFormat, self.token_line, self.token_col,
                              format!("{}{}", sign, sym)))
            },
            Some(c) if c.is_ascii_digit() => self.scan_number(text),
            Some(c) => Err(self.char_error(c)),
            None => Err(toml_err!(ErrorKind::NumberFormat, self.token_line, self.token_col,
                                  sign.to_string()))
        }
    }
}

/// Checks whether the given character is a control character not permitted outside strings.
pub(super) fn is_forbidden_control(ch: char) -> bool {
    matches!(ch, '\u{0000}' ..= '\u{0008}' | '\u{000b}' | '\u{000c}'
               | '\u{000e}' ..= '\u{001f}' | '\u{007f}')
}

/// Returns a printable, quoted representation of the given character for error messages.
pub(super) fn printable_char(ch: char) -> String {
    if ch == '\'' { return String::from("\"'\"") }
    crate::util::quoted(format!("{:?}", ch).trim_matches('\''))
}
