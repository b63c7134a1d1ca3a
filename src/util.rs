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

//! Utility functions.

use regex::Regex;

lazy_static! {
    /// Pattern matching keys that may be emitted without quotes
    static ref BARE_KEY_PATTERN: Regex = Regex::new("^[A-Za-z0-9_-]+$").unwrap();
}

/// Encloses a string in double quotes, if it doesn't start already with double quotes.
///
/// # Arguments
/// * `s` - the string
///
/// # Return values
/// The string enclosed within double quotes
pub(crate) fn quoted(s: &str) -> String {
    if s.starts_with('"') { return s.to_string() }
    let mut quoted_val = String::with_capacity(s.len() + 2);
    quoted_val.push('"');
    quoted_val.push_str(s);
    quoted_val.push('"');
    quoted_val
}

/// Indicates whether the given key may be written without quotes in TOML output.
///
/// # Arguments
/// * `key` - the key
#[inline]
pub(crate) fn is_bare_key(key: &str) -> bool {
    BARE_KEY_PATTERN.is_match(key)
}
