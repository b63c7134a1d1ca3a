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

//! Numeric lexeme handling for the TOML scanner.

use super::*;

impl TomlScanner {
    /// Scans a numeric lexeme.
    /// The text may already contain a consumed sign. Underscore placement, radix prefixes
    /// and leading zeros are validated later during value decoding; the scanner settles the
    /// lexeme boundaries and the integer/float distinction only.
    ///
    /// # Arguments
    /// * `text` - the lexeme accumulated so far (empty or a single sign character)
    ///
    /// # Errors
    /// Returns a structure containing error information for lexemes whose fraction or
    /// exponent part is empty, or which run into characters no number can contain
    pub(super) fn scan_number(&mut self, mut text: String) -> Result<Token, TomlError> {
        // a radix prefix is consumed as a whole, the value decoder rejects it
        if self.peek() == Some('0')
           && matches!(self.peek_at(1), Some('x') | Some('o') | Some('b')) {
            text.push(self.advance().unwrap());
            text.push(self.advance().unwrap());
            while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
                text.push(self.advance().unwrap());
            }
            return Ok(self.value_token(TokenId::Integer, text))
        }
        let mut is_float = false;
        self.consume_digit_run(&mut text);
        if self.peek() == Some('.') && self.fraction_follows() {
            is_float = true;
            text.push(self.advance().unwrap());
            if ! self.consume_digit_run(&mut text) {
                return Err(toml_err!(ErrorKind::NumberFormat, self.token_line, self.token_col,
                                     text))
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            is_float = true;
            text.push(self.advance().unwrap());
            if matches!(self.peek(), Some('+') | Some('-')) {
                text.push(self.advance().unwrap());
            }
            if ! self.consume_digit_run(&mut text) {
                return Err(toml_err!(ErrorKind::NumberFormat, self.token_line, self.token_col,
                                     text))
            }
        }
        // a number must not run directly into a letter
        if matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            return Err(toml_err!(ErrorKind::NumberFormat, self.token_line, self.token_col,
                                 format!("{}{}", text, self.peek().unwrap())))
        }
        let id = if is_float { TokenId::Float } else { TokenId::Integer };
        Ok(self.value_token(id, text))
    }

    /// Consumes a run of decimal digits and underscores into the given buffer.
    ///
    /// # Return values
    /// **true** if at least one digit or underscore was consumed
    fn consume_digit_run(&mut self, text: &mut String) -> bool {
        let mut consumed = false;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '_') {
            text.push(self.advance().unwrap());
            consumed = true;
        }
        consumed
    }

    /// Indicates whether the dot at the current position introduces a fractional part.
    /// A dot followed by anything other than a digit or an underscore belongs to the
    /// surrounding context, e.g. a dotted key.
    fn fraction_follows(&self) -> bool {
        matches!(self.peek_at(1), Some(c) if c.is_ascii_digit() || c == '_')
    }
}
