//! # typetable
//!
//! Infer a typed schema from a sample JSON value and flatten it into a
//! column-aligned type table.
//!
//! ## What does it do?
//!
//! Given one concrete JSON object, `typetable` reads off a structural schema
//! (field names, inferred types, nesting) and turns it into an ordered list
//! of display rows with indent and colspan bookkeeping. Those rows render as
//! a tree-shaped but column-aligned table in HTML or plain text, the kind of
//! "field / type / description" table found in API documentation.
//!
//! ## Key Features
//!
//! - **Single-sample inference**: one example value in, one schema out; no
//!   schema language, no annotations
//! - **Order-preserving**: table rows follow the source document's key order
//! - **Alignment built in**: every row carries its indent level and column
//!   span, so any renderer produces a ragged-free table
//! - **Serde Compatible**: feed it parsed JSON text or any
//!   `#[derive(Serialize)]` type
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! typetable = "0.1"
//! ```
//!
//! ### From JSON text to a table
//!
//! ```rust
//! use typetable::{table_from_str, to_text};
//!
//! let table = table_from_str(r#"{
//!     "id": 1,
//!     "profile": {"name": "Alice", "tags": ["admin"]},
//!     "scores": [{"round": 1, "value": 9.5}]
//! }"#).unwrap();
//!
//! // One row per schema node, pre-order.
//! let names: Vec<_> = table.rows().iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, vec!["id", "profile", "name", "tags", "scores", "round", "value"]);
//!
//! println!("{}", to_text(&table));
//! ```
//!
//! ### From a Rust type
//!
//! ```rust
//! use serde::Serialize;
//! use typetable::table_of;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let table = table_of(&User { id: 1, name: "Alice".into(), active: true }).unwrap();
//! assert_eq!(table.len(), 3);
//! ```
//!
//! ### Building sample values with the sample! macro
//!
//! ```rust
//! use typetable::{infer, sample};
//!
//! let value = sample!({
//!     "name": "Alice",
//!     "age": 30,
//!     "nickname": undefined
//! });
//!
//! let tree = infer(&value).unwrap();
//! assert_eq!(tree.children()[2].label(), "undefined");
//! ```
//!
//! ## Inference policy
//!
//! Arrays of objects are sampled from their FIRST element only; elements past
//! index 0 are never inspected, so heterogeneous arrays lose information.
//! Empty arrays infer an `"undefined"` element type. Both behaviors are
//! documented policy, chosen so one sample value always yields one schema.
//!
//! ## Performance Characteristics
//!
//! - **Inference**: O(n) in the number of values visited (one pass,
//!   first-element sampling skips array tails)
//! - **Flattening**: O(n) in the number of schema nodes
//! - **Memory**: the schema tree is proportional to the input object
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`struct_table.rs`** - derive a type table from a Rust struct
//! - **`json_to_html.rs`** - parse JSON text and print the HTML table
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod schema;
pub mod ser;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use map::JsonMap;
pub use options::RenderOptions;
pub use render::{to_html, to_html_with_options, to_text, to_text_with_options};
pub use schema::{infer, SchemaNode, SchemaTree, Shape};
pub use ser::ValueSerializer;
pub use table::{DisplayRow, TypeTable};
pub use value::{JsonValue, Number};

use serde::Serialize;

/// Parses a string of JSON text into a [`JsonValue`].
///
/// Object keys are kept in document order. Parsing never produces the
/// [`JsonValue::Undefined`] sentinel; JSON text has no spelling for it.
///
/// # Examples
///
/// ```rust
/// use typetable::from_str;
///
/// let value = from_str(r#"{"a": 1, "b": [true, false]}"#).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<JsonValue> {
    serde_json::from_str(s).map_err(Error::parse)
}

/// Converts any `T: Serialize` to a [`JsonValue`].
///
/// Struct fields land in declaration order, so the resulting table follows
/// the type definition top to bottom.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use typetable::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in the JSON data
/// model (e.g. a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<JsonValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Parses JSON text, infers its schema, and flattens it into a [`TypeTable`].
///
/// Composition of [`from_str`], [`infer`], and [`SchemaTree::flatten`].
///
/// # Examples
///
/// ```rust
/// use typetable::table_from_str;
///
/// let table = table_from_str(r#"{"a": {"b": 2}}"#).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.width(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for invalid JSON and [`Error::Shape`] if the
/// top-level value is not an object.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn table_from_str(s: &str) -> Result<TypeTable> {
    let value = from_str(s)?;
    Ok(infer(&value)?.flatten())
}

/// Infers a [`TypeTable`] directly from any `T: Serialize`.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use typetable::table_of;
///
/// #[derive(Serialize)]
/// struct Config { host: String, port: u16 }
///
/// let table = table_of(&Config { host: "localhost".into(), port: 8080 }).unwrap();
/// let types: Vec<_> = table.rows().iter().map(|r| r.value_type.as_str()).collect();
/// assert_eq!(types, vec!["string", "number"]);
/// ```
///
/// # Errors
///
/// Returns an error if `value` cannot be converted to a JSON value, or if it
/// converts to something other than an object (e.g. a `Vec` or a scalar).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn table_of<T>(value: &T) -> Result<TypeTable>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(infer(&value)?.flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_table_from_str_pipeline() {
        let table = table_from_str(r#"{"a": {"b": 2}, "c": [1]}"#).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn test_table_of_struct() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string()],
        };

        let table = table_of(&user).unwrap();
        let rows: Vec<_> = table
            .rows()
            .iter()
            .map(|r| (r.name.as_str(), r.value_type.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("id", "number"),
                ("name", "string"),
                ("active", "boolean"),
                ("tags", "string[]"),
            ]
        );
    }

    #[test]
    fn test_table_of_non_object_is_shape_error() {
        let err = table_of(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = table_from_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
