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

//! String lexeme handling for the TOML scanner.
//! The scanner validates the shape of escape sequences but does not decode them; the raw
//! contents between the delimiters become the token text.

use super::*;

impl TomlScanner {
    /// Scans a string lexeme.
    /// If the two characters after the opener repeat it, the form is multiline and ends at
    /// the next occurrence of the opener repeated three times; otherwise the form is single
    /// line and ends at the next unescaped opener.
    ///
    /// # Arguments
    /// * `opener` - the delimiter character, double quote for basic and single quote for
    ///              literal strings
    ///
    /// # Errors
    /// Returns a structure containing error information for unterminated strings, malformed
    /// escape sequences and forbidden control characters
    pub(super) fn scan_string(&mut self, opener: char) -> Result<Token, TomlError> {
        let basic = opener == '"';
        self.advance();
        if self.peek() == Some(opener) && self.peek_at(1) == Some(opener) {
            self.advance();
            self.advance();
            return self.scan_multiline(opener, basic)
        }
        self.scan_single_line(opener, basic)
    }

    /// Scans the remainder of a single line string. The opening delimiter has been consumed.
    fn scan_single_line(&mut self, opener: char, basic: bool) -> Result<Token, TomlError> {
        let mut text = String::with_capacity(32);
        loop {
            match self.peek() {
                None | Some(LINE_FEED) => {
                    return Err(toml_err!(ErrorKind::UnterminatedString,
                                         self.token_line, self.token_col))
                },
                Some(c) if c == opener => {
                    self.advance();
                    break
                },
                Some('\\') if basic => self.consume_escape_shape(&mut text, false)?,
                Some(c) if is_forbidden_control(c) => {
                    let err = self.char_error(c);
                    self.advance();
                    return Err(err)
                },
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
        let kind = if basic { StringKind::Basic } else { StringKind::Literal };
        let mut token = self.value_token(TokenId::String, text);
        token.string_kind = Some(kind);
        Ok(token)
    }

    /// Scans the remainder of a multiline string. All three opening delimiters have been
    /// consumed. Up to two delimiter characters directly before the closing triple belong
    /// to the string contents.
    fn scan_multiline(&mut self, opener: char, basic: bool) -> Result<Token, TomlError> {
        let mut text = String::with_capacity(64);
        loop {
            match self.peek() {
                None => {
                    return Err(toml_err!(ErrorKind::UnterminatedString,
                                         self.token_line, self.token_col))
                },
                Some(c) if c == opener => {
                    let mut run = 0;
                    while self.peek_at(run) == Some(opener) { run += 1; }
                    if run < 3 {
                        for _ in 0 .. run {
                            text.push(self.advance().unwrap());
                        }
                        continue;
                    }
                    if run > 5 {
                        let err = self.char_error(opener);
                        self.advance();
                        return Err(err)
                    }
                    for _ in 0 .. run - 3 {
                        text.push(self.advance().unwrap());
                    }
                    self.advance();
                    self.advance();
                    self.advance();
                    break
                },
                Some('\\') if basic => self.consume_escape_shape(&mut text, true)?,
                Some(c) if c != LINE_FEED && is_forbidden_control(c) => {
                    let err = self.char_error(c);
                    self.advance();
                    return Err(err)
                },
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
        let kind = if basic { StringKind::MultilineBasic } else { StringKind::MultilineLiteral };
        let mut token = self.value_token(TokenId::String, text);
        token.string_kind = Some(kind);
        Ok(token)
    }

    /// Validates the shape of an escape sequence and copies it verbatim into the buffer.
    /// In multiline strings a backslash directly before a line break, with optional
    /// trailing whitespace in between, is a valid line ending escape.
    ///
    /// # Arguments
    /// * `text` - the buffer receiving the raw escape sequence
    /// * `multiline` - indicates whether line ending escapes are permitted
    fn consume_escape_shape(&mut self, text: &mut String,
                            multiline: bool) -> Result<(), TomlError> {
        let esc_line = self.line_nr;
        let esc_col = self.col_nr;
        self.advance();
        text.push('\\');
        match self.peek() {
            Some('b') | Some('t') | Some('n') | Some('f') | Some('r')
            | Some('"') | Some('\\') => {
                text.push(self.advance().unwrap());
                Ok(())
            },
            Some('u') => {
                text.push(self.advance().unwrap());
                self.consume_hex_digits(text, 4, esc_line, esc_col)
            },
            Some('U') => {
                text.push(self.advance().unwrap());
                self.consume_hex_digits(text, 8, esc_line, esc_col)
            },
            Some(LINE_FEED) | Some(SPACE) | Some(TAB) if multiline => {
                // line ending escape: optional trailing whitespace, then a line break
                let mut ws = String::with_capacity(8);
                while matches!(self.peek(), Some(SPACE) | Some(TAB)) {
                    ws.push(self.advance().unwrap());
                }
                if self.peek() != Some(LINE_FEED) {
                    return Err(toml_err!(ErrorKind::InvalidEscape, esc_line, esc_col,
                                         String::from("\"\\\"")))
                }
                text.push_str(&ws);
                text.push(self.advance().unwrap());
                Ok(())
            },
            Some(c) => {
                Err(toml_err!(ErrorKind::InvalidEscape, esc_line, esc_col,
                              format!("\"\\{}\"", c)))
            },
            None => Err(toml_err!(ErrorKind::UnterminatedString,
                                  self.token_line, self.token_col))
        }
    }

    /// Consumes the given number of hexadecimal digits into the buffer.
    fn consume_hex_digits(&mut self, text: &mut String, count: usize,
                          esc_line: usize, esc_col: usize) -> Result<(), TomlError> {
        for _ in 0 .. count {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    text.push(self.advance().unwrap());
                },
                Some(c) => {
                    return Err(toml_err!(ErrorKind::InvalidEscape, esc_line, esc_col,
                                         format!("\"\\{}\"", c)))
                },
                None => {
                    return Err(toml_err!(ErrorKind::UnterminatedString,
                                         self.token_line, self.token_col))
                }
            }
        }
        Ok(())
    }
}
