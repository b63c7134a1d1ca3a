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

//! Date and time lexeme handling for the TOML scanner.
//! The scanner settles the lexeme boundaries only; field ranges and calendar validity are
//! checked during value decoding. All date/time forms are emitted as date-time tokens,
//! the parser classifies them into the four temporal value kinds.

use super::*;

impl TomlScanner {
    /// Indicates whether the next ten characters match the date shape YYYY-MM-DD.
    pub(super) fn looks_like_date(&self) -> bool {
        for i in 0 .. 10 {
            let expected_digit = i != 4 && i != 7;
            match self.peek_at(i) {
                Some(c) if expected_digit && c.is_ascii_digit() => (),
                Some('-') if ! expected_digit => (),
                _ => return false
            }
        }
        true
    }

    /// Indicates whether the eight characters at the given offset match the time
    /// shape HH:MM:SS.
    fn looks_like_time_at(&self, offset: usize) -> bool {
        for i in 0 .. 8 {
            let expected_digit = i != 2 && i != 5;
            match self.peek_at(offset + i) {
                Some(c) if expected_digit && c.is_ascii_digit() => (),
                Some(':') if ! expected_digit => (),
                _ => return false
            }
        }
        true
    }

    /// Indicates whether the next eight characters match the time shape HH:MM:SS.
    #[inline]
    pub(super) fn looks_like_time(&self) -> bool {
        self.looks_like_time_at(0)
    }

    /// Scans a date, optionally followed by a time and a timezone offset.
    /// The next ten characters are known to match the date shape.
    pub(super) fn scan_datetime(&mut self) -> Result<Token, TomlError> {
        let mut text = String::with_capacity(36);
        for _ in 0 .. 10 {
            text.push(self.advance().unwrap());
        }
        // optional time, introduced by 'T', 't' or a single space directly before a
        // time shaped sequence
        let has_time = match self.peek() {
            Some('T') | Some('t') => true,
            Some(SPACE) => self.looks_like_time_at(1),
            _ => false
        };
        if ! has_time {
            return Ok(self.value_token(TokenId::Datetime, text))
        }
        text.push(self.advance().unwrap());
        self.consume_time_part(&mut text)?;
        // optional timezone offset
        match self.peek() {
            Some('Z') | Some('z') => {
                text.push(self.advance().unwrap());
            },
            Some('+') | Some('-') => {
                text.push(self.advance().unwrap());
                while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == ':') {
                    text.push(self.advance().unwrap());
                }
            },
            _ => ()
        }
        Ok(self.value_token(TokenId::Datetime, text))
    }

    /// Scans a time of day without date part.
    /// The next eight characters are known to match the time shape.
    pub(super) fn scan_bare_time(&mut self) -> Result<Token, TomlError> {
        let mut text = String::with_capacity(18);
        self.consume_time_part(&mut text)?;
        Ok(self.value_token(TokenId::Datetime, text))
    }

    /// Consumes hours, minutes, seconds and an optional fractional part into the buffer.
    fn consume_time_part(&mut self, text: &mut String) -> Result<(), TomlError> {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == ':') {
            text.push(self.advance().unwrap());
        }
        if self.peek() == Some('.') {
            text.push(self.advance().unwrap());
            let mut fract_digits = 0;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                text.push(self.advance().unwrap());
                fract_digits += 1;
            }
            if fract_digits == 0 {
                return Err(toml_err!(ErrorKind::NumberFormat,
                                     self.token_line, self.token_col, text.clone()))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_one(data: &str) -> Token {
        TomlScanner::new(data).next_token().expect("scan failure")
    }

    #[test]
    fn plain_date() {
        let t = scan_one("1979-05-27");
        assert_eq!(t.id, TokenId::Datetime);
        assert_eq!(t.text, "1979-05-27");
    }

    #[test]
    fn datetime_with_t_separator() {
        let t = scan_one("1979-05-27T07:32:00");
        assert_eq!(t.id, TokenId::Datetime);
        assert_eq!(t.text, "1979-05-27T07:32:00");
    }

    #[test]
    fn datetime_with_space_separator() {
        let t = scan_one("1979-05-27 07:32:00");
        assert_eq!(t.text, "1979-05-27 07:32:00");
    }

    #[test]
    fn date_followed_by_unrelated_text_ends_after_ten_chars() {
        let mut scanner = TomlScanner::new("1979-05-27 keep");
        let t = scanner.next_token().unwrap();
        assert_eq!(t.text, "1979-05-27");
        assert_eq!(scanner.next_token().unwrap().text, "keep");
    }

    #[test]
    fn datetime_with_offsets() {
        assert_eq!(scan_one("1979-05-27T00:32:00-07:00").text, "1979-05-27T00:32:00-07:00");
        assert_eq!(scan_one("1979-05-27T07:32:00Z").text, "1979-05-27T07:32:00Z");
        assert_eq!(scan_one("1979-05-27t07:32:00z").text, "1979-05-27t07:32:00z");
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(scan_one("1979-05-27T00:32:00.999999").text, "1979-05-27T00:32:00.999999");
        assert_eq!(scan_one("07:32:00.5").text, "07:32:00.5");
    }

    #[test]
    fn bare_time() {
        let t = scan_one("07:32:00");
        assert_eq!(t.id, TokenId::Datetime);
        assert_eq!(t.text, "07:32:00");
    }

    #[test]
    fn empty_fraction_rejected() {
        let err = TomlScanner::new("07:32:00.").next_token().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumberFormat);
    }
}
