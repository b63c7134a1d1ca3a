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

//! tomlproc is a TOML 1.0.0 processor.
//! It turns textual TOML into an in-memory value tree, turns such trees back into well
//! formed TOML or JSON, validates trees against declarative schemas and binds tables to
//! plain Rust records. All operations are synchronous and single threaded; every value
//! tree is owned by exactly one caller and releases its storage recursively when dropped.
//! Parse failures carry the exact source position and can be rendered as caret
//! diagnostics with an optional fix hint.

#[macro_use]
extern crate lazy_static;

pub mod binding;
pub mod document;
pub mod errorhandling;
pub mod schema;
pub mod serializer;
mod parser;
mod scanner;
mod util;

pub use binding::{BindError, FromTomlValue, TomlRecord};
pub use document::{TomlArray, TomlDocument, TomlItem, TomlKey, TomlTable, TomlValue};
pub use document::{get_array, get_bool, get_datetime, get_float, get_int, get_path,
                   get_string, get_table};
pub use errorhandling::{ErrorContext, ErrorKind, TomlError};
pub use parser::ParseOutcome;
pub use schema::{Constraint, FieldSchema, FieldType, Schema, ValidationResult, validate};
pub use serializer::{stringify, stringify_with, to_json, to_json_pretty, FormatOptions};

/// Result type used throughout the library for error handling
pub type TomlResult<T> = Result<T, TomlError>;

/// Parses a TOML formatted string.
/// The parsing process quits as soon as the first error is encountered.
///
/// # Arguments
/// * `source` - the string containing the TOML formatted input
///
/// # Return values
/// A document structure with all TOML definitions parsed
///
/// # Errors
/// Returns a structure containing error information, if the string can't be parsed
pub fn parse(source: &str) -> TomlResult<TomlDocument> {
    parser::TomlParser::new(source).parse()
}

/// Parses a TOML formatted string, surfacing structured error information.
/// Exactly one of the two fields of the returned outcome is populated: the document on
/// success, an error context with source line, caret position and optional hint on
/// failure.
///
/// # Arguments
/// * `source` - the string containing the TOML formatted input
pub fn parse_with_context(source: &str) -> ParseOutcome {
    parser::TomlParser::new(source).parse_with_context()
}

/// Parses a TOML formatted string and binds its root table to a record.
/// The record type is usually generated with the [`toml_record!`] macro. Binder failures
/// surface as errors of kind [`ErrorKind::InvalidValue`] naming the offending field.
///
/// # Arguments
/// * `source` - the string containing the TOML formatted input
///
/// # Errors
/// Returns a structure containing error information, if the string can't be parsed or
/// the root table does not fit the record
pub fn parse_into<T: TomlRecord>(source: &str) -> TomlResult<T> {
    let document = parse(source)?;
    T::from_table(document.root_table()).map_err(|e| {
        TomlError::with_args(ErrorKind::InvalidValue, 1, 1, &[e.to_string()])
    })
}
