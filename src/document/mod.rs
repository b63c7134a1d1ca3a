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

//! TOML value tree.
//! A document represents all definitions made in a TOML formatted string, structured in a
//! form suitable for processing by software. The tree owns all its storage; dropping the
//! document recursively releases every key, string, array buffer and sub-table.

use chrono::DateTime;
use chrono::naive::{NaiveDate, NaiveDateTime, NaiveTime};
use chrono::offset::FixedOffset;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::fmt;
use crate::errorhandling::*;
use crate::toml_err;
use crate::util::quoted;

/// Type for TOML values of kind table.
/// BTreeMap is used, keys are unique by construction and iteration order is deterministic.
pub type TomlTable = BTreeMap<String, TomlItem>;

/// Type for TOML values of kind array
pub type TomlArray = Vec<TomlItem>;

/// Enumeration for all kinds of TOML values.
/// TOML values are on the right hand side of a key-value pair.
#[derive (Clone, Debug, PartialEq)]
pub enum TomlValue {
    String (String),
    Boolean (bool),
    Integer (i64),
    Float (f64),
    OffsetDateTime (DateTime<FixedOffset>),
    LocalDateTime (NaiveDateTime),
    LocalDate (NaiveDate),
    LocalTime (NaiveTime),
    Table (TomlTable),
    Array (TomlArray)
}
impl TomlValue {
    /// Returns the variant tag name of this value, as used in summaries and error messages.
    pub fn kind_name(&self) -> &'static str {
        match *self {
            TomlValue::String(_) => "string",
            TomlValue::Boolean(_) => "boolean",
            TomlValue::Integer(_) => "integer",
            TomlValue::Float(_) => "float",
            TomlValue::OffsetDateTime(_) => "datetime",
            TomlValue::LocalDateTime(_) => "datetime",
            TomlValue::LocalDate(_) => "date",
            TomlValue::LocalTime(_) => "time",
            TomlValue::Table(_) => "table",
            TomlValue::Array(_) => "array"
        }
    }

    /// Returns the string value, if the variant is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match *self { TomlValue::String(ref val) => Some(val), _ => None }
    }

    /// Returns the boolean value, if the variant is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match *self { TomlValue::Boolean(val) => Some(val), _ => None }
    }

    /// Returns the integer value, if the variant is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match *self { TomlValue::Integer(val) => Some(val), _ => None }
    }

    /// Returns the float value, if the variant is a float value.
    pub fn as_float(&self) -> Option<f64> {
        match *self { TomlValue::Float(val) => Some(val), _ => None }
    }

    /// Returns the date-time value, if the variant is a date-time value including
    /// timezone offset.
    pub fn as_offset_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match *self { TomlValue::OffsetDateTime(ref val) => Some(val), _ => None }
    }

    /// Returns the date-time value, if the variant is a local date-time value.
    pub fn as_local_datetime(&self) -> Option<&NaiveDateTime> {
        match *self { TomlValue::LocalDateTime(ref val) => Some(val), _ => None }
    }

    /// Returns the date value, if the variant is a local date value.
    pub fn as_local_date(&self) -> Option<&NaiveDate> {
        match *self { TomlValue::LocalDate(ref val) => Some(val), _ => None }
    }

    /// Returns the time value, if the variant is a local time value.
    pub fn as_local_time(&self) -> Option<&NaiveTime> {
        match *self { TomlValue::LocalTime(ref val) => Some(val), _ => None }
    }

    /// Returns the table value, if the variant is a table value.
    pub fn as_table(&self) -> Option<&TomlTable> {
        match *self { TomlValue::Table(ref val) => Some(val), _ => None }
    }

    /// Returns the array value, if the variant is an array value.
    pub fn as_array(&self) -> Option<&[TomlItem]> {
        match *self { TomlValue::Array(ref val) => Some(&**val), _ => None }
    }

    /// Indicates whether the variant is one of the four date/time kinds.
    pub fn is_temporal(&self) -> bool {
        matches!(*self, TomlValue::OffsetDateTime(_) | TomlValue::LocalDateTime(_)
                      | TomlValue::LocalDate(_) | TomlValue::LocalTime(_))
    }
}

/// Structural state of a table or array within the tree.
/// Drives the duplicate-key and re-open discipline during parsing.
#[derive (Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ItemState {
    /// Created as a side effect of a dotted key or header path prefix.
    /// A later header with the same path may make the item explicit, once.
    Implicit,
    /// Defined by a table header, or an array of tables that may still receive elements.
    /// A later table header with the same path is an error.
    Explicit,
    /// Terminated structure: scalar values, inline tables and value arrays.
    /// No later header or dotted key may extend it.
    Closed
}

/// Wrapper structure for TOML values within a document.
/// The pure value is enhanced with the source line number and the structural state needed
/// to enforce the duplicate-key discipline.
#[derive (Clone, Debug)]
pub struct TomlItem {
    // the contained value
    value: TomlValue,
    // the line number in the TOML source
    line_nr: usize,
    // structural state, relevant for tables and arrays only
    state: ItemState
}
impl TomlItem {
    /// Creates an item for the specified scalar TOML value.
    ///
    /// # Arguments
    /// * `value` - the TOML value
    /// * `line_nr` - the line number in the TOML source
    #[inline]
    pub fn new(value: TomlValue, line_nr: usize) -> TomlItem {
        TomlItem { value, line_nr, state: ItemState::Closed }
    }

    /// Creates an item for an empty TOML table.
    ///
    /// # Arguments
    /// * `line_nr` - the line number in the TOML source
    /// * `state` - the structural state of the table
    #[inline]
    pub(crate) fn new_table(line_nr: usize, state: ItemState) -> TomlItem {
        TomlItem { value: TomlValue::Table(TomlTable::new()), line_nr, state }
    }

    /// Creates an item for an empty TOML array.
    ///
    /// # Arguments
    /// * `line_nr` - the line number in the TOML source
    /// * `state` - the structural state of the array
    #[inline]
    pub(crate) fn new_array(line_nr: usize, state: ItemState) -> TomlItem {
        TomlItem { value: TomlValue::Array(TomlArray::new()), line_nr, state }
    }

    /// Returns a reference to the TOML value of this item.
    #[inline]
    pub fn value(&self) -> &TomlValue {
        &self.value
    }

    /// Returns a mutable reference to the TOML value of this item.
    #[inline]
    pub fn value_mut(&mut self) -> &mut TomlValue {
        &mut self.value
    }

    /// Returns the line number in the source, where this TOML value is specified.
    #[inline]
    pub fn line_nr(&self) -> usize { self.line_nr }

    #[inline]
    pub(crate) fn state(&self) -> ItemState { self.state }

    /// Marks this item as explicitly defined by a table header.
    #[inline]
    pub(crate) fn make_explicit(&mut self) {
        self.state = ItemState::Explicit;
    }

    /// Marks this item as terminated, no later header or dotted key may extend it.
    #[inline]
    pub(crate) fn close(&mut self) {
        self.state = ItemState::Closed;
    }

    /// Returns the key and value items of all direct children.
    ///
    /// # Return values
    /// an iterator over all child keys and value items; **None** if this item has not type table
    pub fn child_items(&self) -> Option<Iter<String, TomlItem>> {
        match &self.value {
            TomlValue::Table(t) => Some(t.iter()),
            _ => None
        }
    }

    /// Returns the value items of all direct children.
    ///
    /// # Return values
    /// an iterator over all child value items; **None** if this item has not type array
    pub fn child_values(&self) -> Option<std::slice::Iter<TomlItem>> {
        match &self.value {
            TomlValue::Array(a) => Some(a.iter()),
            _ => None
        }
    }

    /// Adds a value item to an array.
    /// If this item is not an array, a call to this function has no effect.
    ///
    /// # Arguments
    /// * `item` - the value item to add
    pub fn push(&mut self, item: TomlItem) {
        if let TomlValue::Array(ref mut a) = self.value { a.push(item); }
    }
}
impl PartialEq for TomlItem {
    // source line and structural state are ignored, two items are equal if their values are
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// TOML key.
/// Keys are on the left hand side of a key-value pair definition, the central building block
/// of TOML. Simple keys consist of a single part, dotted keys of several parts joined with
/// a dot.
#[derive (Clone, Debug, Eq, PartialEq, Hash)]
pub struct TomlKey {
    // all parts of the key, separated by dots. Guaranteed minimum size is 1 element except
    // for the artificial root key.
    parts: Vec<String>,
    // the line number in the TOML source
    line_nr: usize,
    // the column number of the first key character, 1 based
    col_nr: usize
}
impl TomlKey {
    /// Creates the TOML key for the document root.
    pub fn root_key() -> TomlKey {
        TomlKey { parts: Vec::new(), line_nr: 1, col_nr: 1 }
    }

    /// Creates a TOML key from its parts.
    ///
    /// # Arguments
    /// * `parts` - all parts of the key
    /// * `line_nr` - the line number in the TOML source
    /// * `col_nr` - the column number of the first key character
    pub fn from_parts(parts: Vec<String>, line_nr: usize, col_nr: usize) -> TomlKey {
        TomlKey { parts, line_nr, col_nr }
    }

    /// Returns the line number in the source, where this key is specified.
    #[inline]
    pub fn line_nr(&self) -> usize { self.line_nr }

    /// Returns the column number of the first key character.
    #[inline]
    pub fn col_nr(&self) -> usize { self.col_nr }

    /// Returns the key's main part.
    /// Corresponds to the entire string in case of simple keys and to the part after the
    /// rightmost dot for dotted keys.
    pub(crate) fn main_part(&self) -> &str {
        &self.parts[self.parts.len() - 1]
    }

    /// Returns the key's prefix part(s).
    /// Corresponds to an empty slice in case of simple keys and to the parts to the left of
    /// the rightmost dot for dotted keys.
    pub(crate) fn prefix(&self) -> &[String] {
        &self.parts[0 .. self.parts.len() - 1]
    }

    /// Returns all key parts.
    pub(crate) fn all_parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the full key as dotted string.
    pub fn full_name(&self) -> String {
        let mut name = String::with_capacity(64);
        for (i, p) in self.parts.iter().enumerate() {
            if p.is_empty() || p.contains('.') || p.contains(' ') {
                name.push('"');
                name.push_str(p);
                name.push('"');
            } else {
                name.push_str(p);
            }
            if i < self.parts.len() - 1 { name.push('.'); }
        }
        name
    }
}
impl fmt::Display for TomlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// TOML document.
/// A document represents all definitions made in a TOML formatted string, structured in a
/// form suitable for processing by software.
#[derive (Clone, Debug, PartialEq)]
pub struct TomlDocument {
    // root structure is a TOML table
    root: TomlItem,
    // path of the currently selected table or array of tables
    selection: Option<TomlKey>
}
impl TomlDocument {
    /// Returns the document's root table.
    pub fn root_table(&self) -> &TomlTable {
        match self.root.value() {
            TomlValue::Table(t) => t,
            _ => unreachable!("document root is always a table")
        }
    }

    /// Returns all items in the document's root table.
    pub fn root_items(&self) -> Iter<String, TomlItem> {
        self.root_table().iter()
    }

    /// Selects a certain item within the document for subsequent insertion of
    /// key-value pairs. Called by the parser when a table header or an array of tables
    /// header has been detected. All missing parents are created as implicit tables.
    ///
    /// # Arguments
    /// * `key` - the key within the (double) brackets of the header
    /// * `array_of_tables` - indicates whether the header denotes an array of tables
    ///
    /// # Errors
    /// Returns an error if an item along the key's prefix exists with an unsuitable type,
    /// or the item for the key's main part conflicts with the header kind, or an explicitly
    /// defined table is re-opened.
    pub(crate) fn select_header(&mut self, key: &TomlKey,
                                array_of_tables: bool) -> Result<(), TomlError> {
        let parent = walk_prefix(&mut self.root, key.prefix(), key)?;
        if array_of_tables {
            append_array_table(parent, key)?;
        } else {
            define_table(parent, key)?;
        }
        self.selection = Some(key.clone());
        Ok(())
    }

    /// Inserts a TOML value into the currently selected table of the document.
    ///
    /// # Arguments
    /// * `key` - the key used on the left hand side of the key-value pair
    /// * `item` - the value specified on the right hand side of the key-value pair
    ///
    /// # Errors
    /// Returns an error if the final key already exists or an intermediate item along
    /// the path is not an extendable table.
    pub(crate) fn insert(&mut self, key: &TomlKey, item: TomlItem) -> Result<(), TomlError> {
        insert_into(&mut self.root, &self.selection, key, item)
    }
}
impl Default for TomlDocument {
    fn default() -> Self {
        Self { root: TomlItem::new_table(1, ItemState::Implicit), selection: None }
    }
}

/// Inserts a TOML value into a table item.
/// All missing intermediate items along the parent path and the key's prefix are created
/// as implicit tables.
///
/// # Arguments
/// * `root` - the item to start walking from, must be a table
/// * `parent` - the path of the current TOML table; **None** if the value shall be
///              inserted directly under the root item
/// * `key` - the key used on the left hand side of the key-value pair
/// * `item` - the value specified on the right hand side of the key-value pair
///
/// # Errors
/// Returns an error if the final key already exists or an intermediate item is not an
/// extendable table.
pub(crate) fn insert_into(root: &mut TomlItem, parent: &Option<TomlKey>,
                          key: &TomlKey, item: TomlItem) -> Result<(), TomlError> {
    let mut prefix_parts = Vec::<String>::new();
    if let Some(parent_key) = parent {
        prefix_parts.extend_from_slice(parent_key.all_parts());
    }
    prefix_parts.extend_from_slice(key.prefix());
    let parent_table = walk_prefix(root, &prefix_parts, key)?;
    if parent_table.contains_key(key.main_part()) {
        return Err(toml_err!(ErrorKind::DuplicateKey, key.line_nr(), key.col_nr(),
                             quoted(key.main_part())))
    }
    parent_table.insert(key.main_part().to_string(), item);
    Ok(())
}

/// Selects or creates all prefix items for the given prefix names under the specified
/// parent item. Missing items are created as implicit tables; an array of tables along the
/// path is entered at its last element.
///
/// # Arguments
/// * `item` - the parent item
/// * `prefix_names` - the names of all prefix parts
/// * `key` - the full key, used for error positions and names
///
/// # Return values
/// a mutable reference to the table underneath the last prefix
///
/// # Errors
/// Returns an error if an item for at least one prefix exists with an unsuitable type
fn walk_prefix<'a>(mut item: &'a mut TomlItem, prefix_names: &[String],
                   key: &TomlKey) -> Result<&'a mut TomlTable, TomlError> {
    for (i, prefix_name) in prefix_names.iter().enumerate() {
        let item_state = item.state();
        match item.value_mut() {
            TomlValue::Table(ref mut t) => {
                if item_state == ItemState::Closed {
                    return Err(toml_err!(ErrorKind::InvalidTable,
                                         key.line_nr(), key.col_nr(),
                                         format!("{} is a closed table and cannot be extended",
                                                 quoted(&path_fragment(prefix_names, i)))))
                }
                if ! t.contains_key(prefix_name) {
                    t.insert(prefix_name.to_string(),
                             TomlItem::new_table(key.line_nr(), ItemState::Implicit));
                }
                item = t.get_mut(prefix_name).unwrap();
            },
            TomlValue::Array(ref mut a) => {
                if item_state == ItemState::Closed {
                    return Err(toml_err!(ErrorKind::InvalidTable,
                                         key.line_nr(), key.col_nr(),
                                         format!("{} is a value array, not a table",
                                                 quoted(&path_fragment(prefix_names, i)))))
                }
                // array of tables, descend into its most recent element
                let last_elem = a.last_mut().unwrap();
                match last_elem.value_mut() {
                    TomlValue::Table(at) => {
                        if ! at.contains_key(prefix_name) {
                            at.insert(prefix_name.to_string(),
                                      TomlItem::new_table(key.line_nr(), ItemState::Implicit));
                        }
                        item = at.get_mut(prefix_name).unwrap();
                    },
                    _ => return Err(toml_err!(ErrorKind::InvalidTable,
                                              key.line_nr(), key.col_nr(),
                                              format!("{} is not a table",
                                                      quoted(&path_fragment(prefix_names, i)))))
                }
            },
            _ => {
                return Err(toml_err!(ErrorKind::InvalidTable,
                                     key.line_nr(), key.col_nr(),
                                     format!("{} is a simple value, not a table",
                                             quoted(&path_fragment(prefix_names, i)))))
            }
        }
    }
    // the item after the last prefix must denote a table, possibly through the most
    // recent element of an array of tables
    let item_state = item.state();
    match item.value_mut() {
        TomlValue::Table(ref mut t) => {
            if item_state == ItemState::Closed {
                return Err(toml_err!(ErrorKind::InvalidTable, key.line_nr(), key.col_nr(),
                                     format!("{} is a closed table and cannot be extended",
                                             quoted(&path_fragment(prefix_names,
                                                                   prefix_names.len())))))
            }
            Ok(t)
        },
        TomlValue::Array(ref mut a) => {
            if item_state == ItemState::Closed {
                return Err(toml_err!(ErrorKind::InvalidTable, key.line_nr(), key.col_nr(),
                                     format!("{} is a value array, not a table",
                                             quoted(&path_fragment(prefix_names,
                                                                   prefix_names.len())))))
            }
            let last_elem = a.last_mut().unwrap();
            match last_elem.value_mut() {
                TomlValue::Table(ref mut t) => Ok(t),
                _ => Err(toml_err!(ErrorKind::InvalidTable, key.line_nr(), key.col_nr(),
                                   format!("{} is not a table",
                                           quoted(&path_fragment(prefix_names,
                                                                 prefix_names.len())))))
            }
        },
        _ => Err(toml_err!(ErrorKind::InvalidTable, key.line_nr(), key.col_nr(),
                           format!("{} is a simple value, not a table",
                                   quoted(&path_fragment(prefix_names, prefix_names.len())))))
    }
}

/// Selects or creates an item of type table for the main part of the given header key.
///
/// # Arguments
/// * `parent` - the parent table
/// * `key` - the TOML key within the header brackets
///
/// # Errors
/// Returns an error if the item for the key's main part exists with an unsuitable type or
/// has already been defined by a header
fn define_table(parent: &mut TomlTable, key: &TomlKey) -> Result<(), TomlError> {
    let main_key_name = key.main_part();
    if ! parent.contains_key(main_key_name) {
        parent.insert(main_key_name.to_string(),
                      TomlItem::new_table(key.line_nr(), ItemState::Explicit));
        return Ok(())
    }
    let leaf_item = parent.get_mut(main_key_name).unwrap();
    let is_table = matches!(leaf_item.value(), TomlValue::Table(_));
    let is_array = matches!(leaf_item.value(), TomlValue::Array(_));
    if is_table {
        // only tables created implicitly as path prefixes may be re-opened, once
        if leaf_item.state() != ItemState::Implicit {
            return Err(toml_err!(ErrorKind::InvalidTable, key.line_nr(), key.col_nr(),
                                 format!("table {} is already defined",
                                         quoted(&key.full_name()))))
        }
        leaf_item.make_explicit();
        return Ok(())
    }
    if is_array {
        return Err(toml_err!(ErrorKind::InvalidTable, key.line_nr(), key.col_nr(),
                             format!("{} is an array, not a table",
                                     quoted(&key.full_name()))))
    }
    Err(toml_err!(ErrorKind::DuplicateKey, key.line_nr(), key.col_nr(),
                  quoted(&key.full_name())))
}

/// Selects or creates an array of tables for the main part of the given header key and
/// appends a fresh table element to it.
///
/// # Arguments
/// * `parent` - the parent table
/// * `key` - the TOML key within the double header brackets
///
/// # Errors
/// Returns an error if the item for the key's main part exists with an unsuitable type
fn append_array_table(parent: &mut TomlTable, key: &TomlKey) -> Result<(), TomlError> {
    let lnr = key.line_nr();
    let main_key_name = key.main_part();
    if ! parent.contains_key(main_key_name) {
        let mut array_item = TomlItem::new_array(lnr, ItemState::Explicit);
        array_item.push(TomlItem::new_table(lnr, ItemState::Explicit));
        parent.insert(main_key_name.to_string(), array_item);
        return Ok(())
    }
    let leaf_item = parent.get_mut(main_key_name).unwrap();
    let leaf_state = leaf_item.state();
    match leaf_item.value_mut() {
        TomlValue::Array(a) => {
            if leaf_state == ItemState::Closed {
                return Err(toml_err!(ErrorKind::InvalidTable, lnr, key.col_nr(),
                                     format!("{} is a value array and cannot be appended to",
                                             quoted(&key.full_name()))))
            }
            a.push(TomlItem::new_table(lnr, ItemState::Explicit));
            Ok(())
        },
        TomlValue::Table(_) => {
            Err(toml_err!(ErrorKind::InvalidTable, lnr, key.col_nr(),
                          format!("{} is a table, not an array of tables",
                                  quoted(&key.full_name()))))
        },
        _ => Err(toml_err!(ErrorKind::DuplicateKey, lnr, key.col_nr(),
                           quoted(&key.full_name())))
    }
}

/// Returns a leading portion of the given path as a dotted string.
///
/// # Arguments
/// * `parts` - the path parts
/// * `up_to_part` - how many parts shall be included, 0 returns the empty string
fn path_fragment(parts: &[String], up_to_part: usize) -> String {
    let mut frag = String::with_capacity(64);
    let limit = std::cmp::min(parts.len(), up_to_part + 1);
    for (i, part) in parts.iter().take(limit).enumerate() {
        if i > 0 { frag.push('.'); }
        frag.push_str(part);
    }
    frag
}

/// Returns the string value for the given key, if the key exists and holds a string.
pub fn get_string<'a>(table: &'a TomlTable, key: &str) -> Option<&'a str> {
    table.get(key).and_then(|item| item.value().as_str())
}

/// Returns the integer value for the given key, if the key exists and holds an integer.
pub fn get_int(table: &TomlTable, key: &str) -> Option<i64> {
    table.get(key).and_then(|item| item.value().as_integer())
}

/// Returns the float value for the given key, if the key exists and holds a float.
pub fn get_float(table: &TomlTable, key: &str) -> Option<f64> {
    table.get(key).and_then(|item| item.value().as_float())
}

/// Returns the boolean value for the given key, if the key exists and holds a boolean.
pub fn get_bool(table: &TomlTable, key: &str) -> Option<bool> {
    table.get(key).and_then(|item| item.value().as_bool())
}

/// Returns the table value for the given key, if the key exists and holds a table.
pub fn get_table<'a>(table: &'a TomlTable, key: &str) -> Option<&'a TomlTable> {
    table.get(key).and_then(|item| item.value().as_table())
}

/// Returns the array value for the given key, if the key exists and holds an array.
pub fn get_array<'a>(table: &'a TomlTable, key: &str) -> Option<&'a [TomlItem]> {
    table.get(key).and_then(|item| item.value().as_array())
}

/// Returns the value for the given key, if the key exists and holds one of the four
/// date/time kinds.
pub fn get_datetime<'a>(table: &'a TomlTable, key: &str) -> Option<&'a TomlValue> {
    match table.get(key) {
        Some(item) if item.value().is_temporal() => Some(item.value()),
        _ => None
    }
}

/// Walks the dotted segments of the given path and returns the final value item.
/// Any missing key or non-table intermediate yields **None**.
///
/// # Arguments
/// * `table` - the table to start from
/// * `path` - the dotted path, e.g. "server.limits.timeout"
pub fn get_path<'a>(table: &'a TomlTable, path: &str) -> Option<&'a TomlItem> {
    let mut current = table;
    let mut segments = path.split('.').peekable();
    loop {
        let segment = segments.next()?;
        let item = current.get(segment)?;
        if segments.peek().is_none() { return Some(item) }
        match item.value() {
            TomlValue::Table(t) => current = t,
            _ => return None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(parts: &[&str], line: usize) -> TomlKey {
        TomlKey::from_parts(parts.iter().map(|p| p.to_string()).collect(), line, 1)
    }

    fn str_item(s: &str, line: usize) -> TomlItem {
        TomlItem::new(TomlValue::String(s.to_string()), line)
    }

    #[test]
    fn insert_and_lookup() {
        let mut doc = TomlDocument::default();
        doc.insert(&key(&["name"], 1), str_item("test", 1)).unwrap();
        doc.insert(&key(&["port"], 2), TomlItem::new(TomlValue::Integer(8080), 2)).unwrap();
        assert_eq!(get_string(doc.root_table(), "name"), Some("test"));
        assert_eq!(get_int(doc.root_table(), "port"), Some(8080));
        assert_eq!(get_int(doc.root_table(), "name"), None);
        assert_eq!(get_string(doc.root_table(), "missing"), None);
    }

    #[test]
    fn duplicate_final_key_fails() {
        let mut doc = TomlDocument::default();
        doc.insert(&key(&["name"], 1), str_item("a", 1)).unwrap();
        let err = doc.insert(&key(&["name"], 2), str_item("b", 2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn dotted_key_creates_intermediate_tables() {
        let mut doc = TomlDocument::default();
        doc.insert(&key(&["a", "b", "c"], 1), str_item("v", 1)).unwrap();
        let a = get_table(doc.root_table(), "a").unwrap();
        let b = get_table(a, "b").unwrap();
        assert_eq!(get_string(b, "c"), Some("v"));
    }

    #[test]
    fn dotted_key_through_scalar_fails() {
        let mut doc = TomlDocument::default();
        doc.insert(&key(&["a"], 1), str_item("v", 1)).unwrap();
        let err = doc.insert(&key(&["a", "b"], 2), str_item("w", 2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTable);
    }

    #[test]
    fn header_selection_scopes_inserts() {
        let mut doc = TomlDocument::default();
        doc.select_header(&key(&["server"], 1), false).unwrap();
        doc.insert(&key(&["host"], 2), str_item("localhost", 2)).unwrap();
        let server = get_table(doc.root_table(), "server").unwrap();
        assert_eq!(get_string(server, "host"), Some("localhost"));
    }

    #[test]
    fn implicit_table_can_be_made_explicit_once() {
        let mut doc = TomlDocument::default();
        doc.select_header(&key(&["a", "b"], 1), false).unwrap();
        // [a] after [a.b] is fine, a was created implicitly
        doc.select_header(&key(&["a"], 2), false).unwrap();
        // second [a] re-opens an explicitly defined table
        let err = doc.select_header(&key(&["a"], 3), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTable);
    }

    #[test]
    fn header_reopen_fails() {
        let mut doc = TomlDocument::default();
        doc.select_header(&key(&["server"], 1), false).unwrap();
        let err = doc.select_header(&key(&["server"], 2), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTable);
    }

    #[test]
    fn array_of_tables_appends_elements() {
        let mut doc = TomlDocument::default();
        doc.select_header(&key(&["products"], 1), true).unwrap();
        doc.insert(&key(&["name"], 2), str_item("Hammer", 2)).unwrap();
        doc.select_header(&key(&["products"], 3), true).unwrap();
        doc.insert(&key(&["name"], 4), str_item("Nail", 4)).unwrap();
        let products = get_array(doc.root_table(), "products").unwrap();
        assert_eq!(products.len(), 2);
        let first = products[0].value().as_table().unwrap();
        let second = products[1].value().as_table().unwrap();
        assert_eq!(get_string(first, "name"), Some("Hammer"));
        assert_eq!(get_string(second, "name"), Some("Nail"));
    }

    #[test]
    fn table_header_on_array_of_tables_fails() {
        let mut doc = TomlDocument::default();
        doc.select_header(&key(&["products"], 1), true).unwrap();
        let err = doc.select_header(&key(&["products"], 2), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTable);
    }

    #[test]
    fn array_header_on_table_fails() {
        let mut doc = TomlDocument::default();
        doc.select_header(&key(&["server"], 1), false).unwrap();
        let err = doc.select_header(&key(&["server"], 2), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTable);
    }

    #[test]
    fn subtable_of_array_element_lands_in_last_element() {
        let mut doc = TomlDocument::default();
        doc.select_header(&key(&["fruit"], 1), true).unwrap();
        doc.insert(&key(&["name"], 2), str_item("apple", 2)).unwrap();
        doc.select_header(&key(&["fruit", "physical"], 3), false).unwrap();
        doc.insert(&key(&["color"], 4), str_item("red", 4)).unwrap();
        let fruit = get_array(doc.root_table(), "fruit").unwrap();
        assert_eq!(fruit.len(), 1);
        let elem = fruit[0].value().as_table().unwrap();
        let physical = get_table(elem, "physical").unwrap();
        assert_eq!(get_string(physical, "color"), Some("red"));
    }

    #[test]
    fn closed_table_cannot_be_extended() {
        let mut doc = TomlDocument::default();
        // simulates x = { a = 1 } followed by [x.y]
        let mut inline = TomlItem::new_table(1, ItemState::Closed);
        if let TomlValue::Table(t) = inline.value_mut() {
            t.insert(String::from("a"), TomlItem::new(TomlValue::Integer(1), 1));
        }
        doc.insert(&key(&["x"], 1), inline).unwrap();
        let err = doc.select_header(&key(&["x", "y"], 2), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTable);
    }

    #[test]
    fn path_walks_nested_tables() {
        let mut doc = TomlDocument::default();
        doc.insert(&key(&["a", "b", "c"], 1), TomlItem::new(TomlValue::Integer(7), 1)).unwrap();
        let item = get_path(doc.root_table(), "a.b.c").unwrap();
        assert_eq!(item.value().as_integer(), Some(7));
        assert!(get_path(doc.root_table(), "a.x.c").is_none());
        assert!(get_path(doc.root_table(), "a.b.c.d").is_none());
    }

    #[test]
    fn temporal_getter_matches_all_datetime_kinds() {
        let mut doc = TomlDocument::default();
        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        doc.insert(&key(&["day"], 1),
                   TomlItem::new(TomlValue::LocalDate(date), 1)).unwrap();
        doc.insert(&key(&["n"], 2), TomlItem::new(TomlValue::Integer(1), 2)).unwrap();
        assert!(get_datetime(doc.root_table(), "day").is_some());
        assert!(get_datetime(doc.root_table(), "n").is_none());
    }
}
