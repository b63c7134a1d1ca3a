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

//! Record binding: conversion of TOML tables into plain Rust records.
//! The `toml_record!` macro generates the per record glue at build time: the struct
//! definition, a binding from a table and a default schema derived from the declared
//! field types. Field defaults make a field optional, `Option` wrapped fields bind to
//! `None` when absent.

use std::fmt;
use crate::document::{TomlTable, TomlValue};
use crate::schema::FieldType;

/// Failure raised while binding a table to a record.
#[derive (Clone, Debug, Eq, PartialEq)]
pub enum BindError {
    /// A field exists but holds a value that cannot be converted to the record field type.
    TypeMismatch {
        /// dotted path of the offending field, filled while the error propagates upwards
        field: String,
        /// description of the expected value
        expected: &'static str,
        /// description of the value found
        found: &'static str
    },
    /// A field without default is absent from the table.
    MissingField(String)
}
impl BindError {
    /// Creates a type mismatch without field path.
    pub fn mismatch(expected: &'static str, found: &'static str) -> BindError {
        BindError::TypeMismatch { field: String::new(), expected, found }
    }

    /// Prepends the given field name to the error's field path.
    pub fn for_field(mut self, name: &str) -> BindError {
        match &mut self {
            BindError::TypeMismatch { field, .. } => prepend_path(field, name),
            BindError::MissingField(field) => prepend_path(field, name)
        }
        self
    }
}
impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::TypeMismatch { field, expected, found } => {
                write!(f, "Field '{}': expected {}, found {}", field, expected, found)
            },
            BindError::MissingField(field) => {
                write!(f, "Missing field: '{}'", field)
            }
        }
    }
}
impl std::error::Error for BindError {}

/// Prepends one path segment to a dotted field path.
fn prepend_path(path: &mut String, name: &str) {
    if path.is_empty() {
        path.push_str(name);
    } else {
        *path = format!("{}.{}", name, path);
    }
}

/// Conversion of a single TOML value into a Rust field value.
/// Implementations exist for the scalar types, vectors, fixed length arrays, `Option`
/// and every type generated by `toml_record!`.
pub trait FromTomlValue: Sized {
    /// Marker for fields that may be absent without a declared default.
    const OPTIONAL: bool = false;

    /// Returns the schema field type inferred for this Rust type.
    fn field_type() -> FieldType;

    /// Converts the given value.
    ///
    /// # Errors
    /// Returns a bind error if the value kind or range does not fit
    fn from_toml(value: &TomlValue) -> Result<Self, BindError>;

    /// Returns the value bound when the field is absent, if the type permits absence.
    fn from_absent() -> Option<Self> { None }
}

impl FromTomlValue for String {
    fn field_type() -> FieldType { FieldType::String }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        match value {
            TomlValue::String(s) => Ok(s.clone()),
            other => Err(BindError::mismatch("string", other.kind_name()))
        }
    }
}

impl FromTomlValue for bool {
    fn field_type() -> FieldType { FieldType::Boolean }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        match value {
            TomlValue::Boolean(b) => Ok(*b),
            other => Err(BindError::mismatch("boolean", other.kind_name()))
        }
    }
}

impl FromTomlValue for i64 {
    fn field_type() -> FieldType { FieldType::Integer }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        match value {
            TomlValue::Integer(v) => Ok(*v),
            other => Err(BindError::mismatch("integer", other.kind_name()))
        }
    }
}

/// Implements FromTomlValue for a range checked narrow integer type.
macro_rules! narrow_int_binding {
    ($t:ty, $desc:literal) => {
        impl FromTomlValue for $t {
            fn field_type() -> FieldType { FieldType::Integer }
            fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
                match value {
                    TomlValue::Integer(v) => {
                        <$t>::try_from(*v)
                            .map_err(|_| BindError::mismatch($desc,
                                                             "integer out of range"))
                    },
                    other => Err(BindError::mismatch($desc, other.kind_name()))
                }
            }
        }
    };
}
narrow_int_binding!(i8, "8 bit integer");
narrow_int_binding!(i16, "16 bit integer");
narrow_int_binding!(i32, "32 bit integer");
narrow_int_binding!(u8, "unsigned 8 bit integer");
narrow_int_binding!(u16, "unsigned 16 bit integer");
narrow_int_binding!(u32, "unsigned 32 bit integer");

impl FromTomlValue for f64 {
    fn field_type() -> FieldType { FieldType::Float }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        match value {
            TomlValue::Float(v) => Ok(*v),
            // integers widen lossily
            TomlValue::Integer(v) => Ok(*v as f64),
            other => Err(BindError::mismatch("float", other.kind_name()))
        }
    }
}

impl FromTomlValue for f32 {
    fn field_type() -> FieldType { FieldType::Float }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        f64::from_toml(value).map(|v| v as f32)
    }
}

impl<T: FromTomlValue> FromTomlValue for Vec<T> {
    fn field_type() -> FieldType { FieldType::Array }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        match value {
            TomlValue::Array(a) => {
                let mut res = Vec::with_capacity(a.len());
                for (i, element) in a.iter().enumerate() {
                    let converted = T::from_toml(element.value())
                        .map_err(|e| e.for_field(&i.to_string()))?;
                    res.push(converted);
                }
                Ok(res)
            },
            other => Err(BindError::mismatch("array", other.kind_name()))
        }
    }
}

impl<T: FromTomlValue, const N: usize> FromTomlValue for [T; N] {
    fn field_type() -> FieldType { FieldType::Array }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        match value {
            TomlValue::Array(a) => {
                if a.len() != N {
                    return Err(BindError::mismatch("array of fixed length",
                                                   "array of different length"))
                }
                let converted = Vec::<T>::from_toml(value)?;
                converted.try_into()
                         .map_err(|_| BindError::mismatch("array of fixed length",
                                                          "array of different length"))
            },
            other => Err(BindError::mismatch("array", other.kind_name()))
        }
    }
}

impl<T: FromTomlValue> FromTomlValue for Option<T> {
    const OPTIONAL: bool = true;
    fn field_type() -> FieldType { T::field_type() }
    fn from_toml(value: &TomlValue) -> Result<Self, BindError> {
        T::from_toml(value).map(Some)
    }
    fn from_absent() -> Option<Self> { Some(None) }
}

/// A record type a TOML table can be bound to.
/// Implemented by the `toml_record!` macro; the derived schema mirrors the record's
/// fields, with required set for every field lacking both a default and an `Option`
/// wrapper.
pub trait TomlRecord: Sized {
    /// Binds the given table to a record.
    ///
    /// # Errors
    /// Returns a bind error naming the first offending field
    fn from_table(table: &TomlTable) -> Result<Self, BindError>;

    /// Returns the default schema derived from the record definition.
    fn schema() -> crate::schema::Schema;
}

/// Generates a record struct with table binding and a derived schema.
///
/// Every field may carry a default expression after an equals sign; such fields are
/// optional in the derived schema and bind to the default when absent. Fields of type
/// `Option<T>` bind to `None` when absent.
///
/// ```ignore
/// toml_record! {
///     pub struct ServerConfig {
///         host: String = String::from("localhost"),
///         port: u16,
///         limits: Option<Limits>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! toml_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $fname:ident : $ftype:ty $(= $default:expr)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive (Clone, Debug, PartialEq)]
        $vis struct $name {
            $( pub $fname: $ftype ),*
        }
        impl $crate::binding::TomlRecord for $name {
            fn from_table(table: &$crate::document::TomlTable)
                          -> Result<Self, $crate::binding::BindError> {
                Ok($name {
                    $( $fname: $crate::toml_record!(@field table, $fname, $ftype
                                                    $(, $default)?) ),*
                })
            }
            fn schema() -> $crate::schema::Schema {
                let mut schema = $crate::schema::Schema::new();
                $(
                    let field = $crate::schema::FieldSchema::new(
                        stringify!($fname),
                        <$ftype as $crate::binding::FromTomlValue>::field_type());
                    let field = if $crate::toml_record!(@required $ftype $(, $default)?) {
                        field.required()
                    } else {
                        field
                    };
                    schema = schema.with_field(field);
                )*
                schema
            }
        }
        impl $crate::binding::FromTomlValue for $name {
            fn field_type() -> $crate::schema::FieldType {
                $crate::schema::FieldType::Table
            }
            fn from_toml(value: &$crate::document::TomlValue)
                         -> Result<Self, $crate::binding::BindError> {
                match value {
                    $crate::document::TomlValue::Table(t) => {
                        <$name as $crate::binding::TomlRecord>::from_table(t)
                    },
                    other => Err($crate::binding::BindError::mismatch("table",
                                                                      other.kind_name()))
                }
            }
        }
    };
    (@field $table:ident, $fname:ident, $ftype:ty) => {
        match $table.get(stringify!($fname)) {
            Some(item) => {
                <$ftype as $crate::binding::FromTomlValue>::from_toml(item.value())
                    .map_err(|e| e.for_field(stringify!($fname)))?
            },
            None => {
                <$ftype as $crate::binding::FromTomlValue>::from_absent()
                    .ok_or_else(|| $crate::binding::BindError::MissingField(
                        String::from(stringify!($fname))))?
            }
        }
    };
    (@field $table:ident, $fname:ident, $ftype:ty, $default:expr) => {
        match $table.get(stringify!($fname)) {
            Some(item) => {
                <$ftype as $crate::binding::FromTomlValue>::from_toml(item.value())
                    .map_err(|e| e.for_field(stringify!($fname)))?
            },
            None => $default
        }
    };
    (@required $ftype:ty) => {
        ! <$ftype as $crate::binding::FromTomlValue>::OPTIONAL
    };
    (@required $ftype:ty, $default:expr) => { false };
}
