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

//! Declarative schema validation for TOML tables.
//! A schema lists the expected fields of a table with their value kinds, optional
//! constraints and nested schemas for sub-tables. Validation never mutates the input and
//! never aborts; every problem found becomes a human readable error string.

use regex::Regex;
use std::collections::HashSet;
use crate::document::{TomlTable, TomlValue};

/// Expected value kind of a schema field.
#[derive (Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    Date,
    Time,
    Array,
    Table,
    Any
}
impl FieldType {
    /// Returns the name of this field type, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Datetime => "datetime",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Array => "array",
            FieldType::Table => "table",
            FieldType::Any => "any"
        }
    }

    /// Indicates whether the given value is of this field type.
    fn matches(&self, value: &TomlValue) -> bool {
        match self {
            FieldType::String => matches!(value, TomlValue::String(_)),
            FieldType::Integer => matches!(value, TomlValue::Integer(_)),
            FieldType::Float => matches!(value, TomlValue::Float(_)),
            FieldType::Boolean => matches!(value, TomlValue::Boolean(_)),
            FieldType::Datetime => matches!(value, TomlValue::OffsetDateTime(_)
                                                 | TomlValue::LocalDateTime(_)),
            FieldType::Date => matches!(value, TomlValue::LocalDate(_)),
            FieldType::Time => matches!(value, TomlValue::LocalTime(_)),
            FieldType::Array => matches!(value, TomlValue::Array(_)),
            FieldType::Table => matches!(value, TomlValue::Table(_)),
            FieldType::Any => true
        }
    }
}

/// Caller supplied predicate over a TOML value.
pub type Predicate = fn(&TomlValue) -> bool;

/// A single restriction on the value of a schema field.
/// Every constraint targets one value kind and is skipped for values of any other kind.
#[derive (Clone, Debug)]
pub enum Constraint {
    /// integer must not be below the given bound
    MinValue(i64),
    /// integer must not exceed the given bound
    MaxValue(i64),
    /// string byte length must not be below the given bound
    MinLength(usize),
    /// string byte length must not exceed the given bound
    MaxLength(usize),
    /// string must equal one of the listed literals
    OneOf(Vec<String>),
    /// string must match the given regular expression
    Pattern(String),
    /// value must satisfy the given predicate
    Custom(Predicate)
}

/// Description of a single expected field within a table.
#[derive (Clone, Debug)]
pub struct FieldSchema {
    name: String,
    field_type: FieldType,
    required: bool,
    constraints: Vec<Constraint>,
    nested: Option<Schema>
}
impl FieldSchema {
    /// Creates an optional field schema without constraints.
    ///
    /// # Arguments
    /// * `name` - the field name
    /// * `field_type` - the expected value kind
    pub fn new(name: &str, field_type: FieldType) -> FieldSchema {
        FieldSchema {
            name: name.to_string(),
            field_type,
            required: false,
            constraints: Vec::new(),
            nested: None
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> FieldSchema {
        self.required = true;
        self
    }

    /// Adds a constraint to the field.
    pub fn with_constraint(mut self, constraint: Constraint) -> FieldSchema {
        self.constraints.push(constraint);
        self
    }

    /// Attaches a nested schema, applied when the field holds a table.
    pub fn with_nested(mut self, schema: Schema) -> FieldSchema {
        self.nested = Some(schema);
        self
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the expected value kind.
    #[inline]
    pub fn field_type(&self) -> FieldType { self.field_type }

    /// Indicates whether the field must be present.
    #[inline]
    pub fn is_required(&self) -> bool { self.required }
}

/// Declarative description of the expected contents of a TOML table.
#[derive (Clone, Debug, Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
    allow_unknown: bool,
    description: Option<String>
}
impl Schema {
    /// Creates an empty schema that rejects unknown fields.
    pub fn new() -> Schema {
        Schema::default()
    }

    /// Adds a field description to the schema.
    pub fn with_field(mut self, field: FieldSchema) -> Schema {
        self.fields.push(field);
        self
    }

    /// Permits fields not mentioned in the schema.
    pub fn allow_unknown(mut self) -> Schema {
        self.allow_unknown = true;
        self
    }

    /// Attaches a human readable description to the schema.
    pub fn with_description(mut self, description: &str) -> Schema {
        self.description = Some(description.to_string());
        self
    }

    /// Returns the field descriptions.
    #[inline]
    pub fn fields(&self) -> &[FieldSchema] { &self.fields }

    /// Returns the schema description, if any.
    #[inline]
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
}

/// Outcome of a validation run.
/// The result is valid exactly if the error list is empty.
#[derive (Clone, Debug)]
pub struct ValidationResult {
    errors: Vec<String>
}
impl ValidationResult {
    /// Indicates whether the validated table satisfies the schema.
    #[inline]
    pub fn valid(&self) -> bool { self.errors.is_empty() }

    /// Returns all problems found, in schema declaration order.
    #[inline]
    pub fn errors(&self) -> &[String] { &self.errors }
}

/// Checks a table against a schema.
/// All declared fields are visited in order, afterwards unknown fields are reported
/// unless the schema permits them. The input table is never modified.
///
/// # Arguments
/// * `schema` - the schema to check against
/// * `table` - the table to check
pub fn validate(schema: &Schema, table: &TomlTable) -> ValidationResult {
    let mut errors = Vec::new();
    for field in &schema.fields {
        let item = match table.get(&field.name) {
            None => {
                if field.required {
                    errors.push(format!("Missing required field: '{}'", field.name));
                }
                continue;
            },
            Some(i) => i
        };
        let value = item.value();
        if ! field.field_type.matches(value) {
            errors.push(format!("Field '{}' has wrong type: expected {}, found {}",
                                field.name, field.field_type.name(), value.kind_name()));
            continue;
        }
        for constraint in &field.constraints {
            apply_constraint(&field.name, constraint, value, &mut errors);
        }
        if let (Some(nested), TomlValue::Table(sub_table)) = (&field.nested, value) {
            let sub_result = validate(nested, sub_table);
            errors.extend(sub_result.errors.iter()
                                    .map(|e| format!("{}.{}", field.name, e)));
        }
    }
    if ! schema.allow_unknown {
        let declared: HashSet<&str> = schema.fields.iter()
                                            .map(|f| f.name.as_str()).collect();
        for key in table.keys() {
            if ! declared.contains(key.as_str()) {
                errors.push(format!("Unknown field: '{}'", key));
            }
        }
    }
    ValidationResult { errors }
}

/// Applies a single constraint to a field value, appending a message on violation.
///
/// # Arguments
/// * `name` - the field name, used in messages
/// * `constraint` - the constraint to apply
/// * `value` - the field value
/// * `errors` - the list receiving violation messages
fn apply_constraint(name: &str, constraint: &Constraint,
                    value: &TomlValue, errors: &mut Vec<String>) {
    match constraint {
        Constraint::MinValue(min) => {
            if let Some(v) = value.as_integer() {
                if v < *min {
                    errors.push(format!("Field '{}' value {} is below minimum {}",
                                        name, v, min));
                }
            }
        },
        Constraint::MaxValue(max) => {
            if let Some(v) = value.as_integer() {
                if v > *max {
                    errors.push(format!("Field '{}' value {} exceeds maximum {}",
                                        name, v, max));
                }
            }
        },
        Constraint::MinLength(min) => {
            if let Some(s) = value.as_str() {
                if s.len() < *min {
                    errors.push(format!("Field '{}' length {} is below minimum {}",
                                        name, s.len(), min));
                }
            }
        },
        Constraint::MaxLength(max) => {
            if let Some(s) = value.as_str() {
                if s.len() > *max {
                    errors.push(format!("Field '{}' length {} exceeds maximum {}",
                                        name, s.len(), max));
                }
            }
        },
        Constraint::OneOf(literals) => {
            if let Some(s) = value.as_str() {
                if ! literals.iter().any(|l| l == s) {
                    errors.push(format!("Field '{}' value '{}' is not one of: {}",
                                        name, s, literals.join(", ")));
                }
            }
        },
        Constraint::Pattern(pattern) => {
            if let Some(s) = value.as_str() {
                match Regex::new(pattern) {
                    Ok(re) => {
                        if ! re.is_match(s) {
                            errors.push(format!(
                                "Field '{}' value '{}' does not match pattern '{}'",
                                name, s, pattern));
                        }
                    },
                    Err(_) => {
                        errors.push(format!("Field '{}' pattern '{}' is not a valid \
                                             regular expression", name, pattern));
                    }
                }
            }
        },
        Constraint::Custom(predicate) => {
            if ! predicate(value) {
                errors.push(format!("Field '{}' was rejected by custom predicate", name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TomlParser;
    use crate::document::TomlDocument;

    fn parse_ok(data: &str) -> TomlDocument {
        TomlParser::new(data).parse().expect("parse failure")
    }

    #[test]
    fn empty_schema_accepts_empty_table() {
        let doc = parse_ok("");
        let result = validate(&Schema::new(), doc.root_table());
        assert!(result.valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn port_range_violation() {
        let doc = parse_ok("port = 99999\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("port", FieldType::Integer)
                            .required()
                            .with_constraint(Constraint::MaxValue(65535)));
        let result = validate(&schema, doc.root_table());
        assert!(! result.valid());
        assert_eq!(result.errors().len(), 1);
        let msg = &result.errors()[0];
        assert!(msg.contains("port"));
        assert!(msg.contains("99999"));
        assert!(msg.contains("65535"));
    }

    #[test]
    fn missing_required_field() {
        let doc = parse_ok("host = \"x\"\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("host", FieldType::String))
            .with_field(FieldSchema::new("port", FieldType::Integer).required());
        let result = validate(&schema, doc.root_table());
        assert_eq!(result.errors(), &["Missing required field: 'port'"]);
    }

    #[test]
    fn absent_optional_field_is_fine() {
        let doc = parse_ok("");
        let schema = Schema::new()
            .with_field(FieldSchema::new("port", FieldType::Integer));
        assert!(validate(&schema, doc.root_table()).valid());
    }

    #[test]
    fn wrong_type_reported() {
        let doc = parse_ok("port = \"eighty\"\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("port", FieldType::Integer).required());
        let result = validate(&schema, doc.root_table());
        assert_eq!(result.errors(),
                   &["Field 'port' has wrong type: expected integer, found string"]);
    }

    #[test]
    fn unknown_fields_reported() {
        let doc = parse_ok("host = \"x\"\nextra = 1\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("host", FieldType::String));
        let result = validate(&schema, doc.root_table());
        assert_eq!(result.errors(), &["Unknown field: 'extra'"]);
        let lenient = schema.allow_unknown();
        assert!(validate(&lenient, doc.root_table()).valid());
    }

    #[test]
    fn string_length_constraints() {
        let doc = parse_ok("name = \"ab\"\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("name", FieldType::String)
                            .with_constraint(Constraint::MinLength(3)));
        assert!(! validate(&schema, doc.root_table()).valid());
        let schema = Schema::new()
            .with_field(FieldSchema::new("name", FieldType::String)
                            .with_constraint(Constraint::MaxLength(1)));
        assert!(! validate(&schema, doc.root_table()).valid());
        let schema = Schema::new()
            .with_field(FieldSchema::new("name", FieldType::String)
                            .with_constraint(Constraint::MinLength(2))
                            .with_constraint(Constraint::MaxLength(2)));
        assert!(validate(&schema, doc.root_table()).valid());
    }

    #[test]
    fn one_of_constraint() {
        let doc = parse_ok("level = \"verbose\"\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("level", FieldType::String)
                            .with_constraint(Constraint::OneOf(
                                vec![String::from("debug"), String::from("info")])));
        let result = validate(&schema, doc.root_table());
        assert!(result.errors()[0].contains("verbose"));
        assert!(result.errors()[0].contains("debug, info"));
    }

    #[test]
    fn pattern_constraint() {
        let doc = parse_ok("version = \"1.2.3\"\nbad = \"abc\"\n");
        let field = |name| FieldSchema::new(name, FieldType::String)
            .with_constraint(Constraint::Pattern(String::from(r"^\d+\.\d+\.\d+$")));
        let schema = Schema::new().allow_unknown().with_field(field("version"));
        assert!(validate(&schema, doc.root_table()).valid());
        let schema = Schema::new().allow_unknown().with_field(field("bad"));
        assert!(! validate(&schema, doc.root_table()).valid());
    }

    #[test]
    fn custom_predicate() {
        fn even(value: &TomlValue) -> bool {
            value.as_integer().map(|v| v % 2 == 0).unwrap_or(false)
        }
        let doc = parse_ok("n = 3\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("n", FieldType::Integer)
                            .with_constraint(Constraint::Custom(even)));
        let result = validate(&schema, doc.root_table());
        assert_eq!(result.errors(), &["Field 'n' was rejected by custom predicate"]);
    }

    #[test]
    fn nested_schema_prefixes_errors() {
        let doc = parse_ok("[server]\nport = 99999\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("server", FieldType::Table)
                            .required()
                            .with_nested(Schema::new()
                                .with_field(FieldSchema::new("port", FieldType::Integer)
                                                .required()
                                                .with_constraint(
                                                    Constraint::MaxValue(65535)))));
        let result = validate(&schema, doc.root_table());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].starts_with("server."));
        assert!(result.errors()[0].contains("99999"));
    }

    #[test]
    fn datetime_field_types() {
        let doc = parse_ok("dt = 1979-05-27T07:32:00Z\nd = 1979-05-27\nt = 07:32:00\n");
        let schema = Schema::new()
            .with_field(FieldSchema::new("dt", FieldType::Datetime).required())
            .with_field(FieldSchema::new("d", FieldType::Date).required())
            .with_field(FieldSchema::new("t", FieldType::Time).required());
        assert!(validate(&schema, doc.root_table()).valid());
        let wrong = Schema::new().allow_unknown()
            .with_field(FieldSchema::new("d", FieldType::Datetime).required());
        assert!(! validate(&wrong, doc.root_table()).valid());
    }

    // adding a field can only shrink the set of valid inputs, widening a bound can
    // only grow it
    #[test]
    fn validator_monotonicity() {
        let doc = parse_ok("a = 10\n");
        let base = Schema::new().allow_unknown()
            .with_field(FieldSchema::new("a", FieldType::Integer)
                            .with_constraint(Constraint::MaxValue(20)));
        assert!(validate(&base, doc.root_table()).valid());
        let narrowed = base.clone()
            .with_field(FieldSchema::new("b", FieldType::Integer).required());
        assert!(! validate(&narrowed, doc.root_table()).valid());
        let tightened = Schema::new().allow_unknown()
            .with_field(FieldSchema::new("a", FieldType::Integer)
                            .with_constraint(Constraint::MaxValue(5)));
        assert!(! validate(&tightened, doc.root_table()).valid());
    }

    #[test]
    fn validation_never_mutates() {
        let doc = parse_ok("a = 1\n");
        let before = doc.clone();
        let schema = Schema::new()
            .with_field(FieldSchema::new("missing", FieldType::String).required());
        let _ = validate(&schema, doc.root_table());
        assert_eq!(doc, before);
    }
}
