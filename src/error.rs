//! Error types for parsing and schema inference.
//!
//! Every failure in this crate is locally recoverable: a caller fixes the
//! input and calls again. There are no retries and no partially-built state
//! to clean up.
//!
//! ## Error Categories
//!
//! - **Parse errors**: the input text is not valid JSON (reported by the
//!   underlying `serde_json` parser)
//! - **Shape errors**: the top-level value parsed fine but is not an object,
//!   so there are no named fields to build a table from
//! - **Unsupported types**: a Rust value handed to [`crate::to_value`] does
//!   not fit the JSON data model (e.g. a map with non-string keys)
//!
//! ## Examples
//!
//! ```rust
//! use typetable::{table_from_str, Error};
//!
//! // A bare array is valid JSON but has no field names to tabulate.
//! let err = table_from_str("[1, 2, 3]").unwrap_err();
//! assert!(matches!(err, Error::Shape { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// The top-level value is not a JSON object.
    ///
    /// Schema inference needs named fields; a bare array or scalar has none.
    /// This is reported explicitly instead of letting the traversal hit an
    /// unrelated type error.
    #[error("expected a JSON object at the top level, found {found}")]
    Shape { found: String },

    /// A Rust value cannot be represented in the JSON data model.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a parse error wrapping the underlying parser's message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typetable::Error;
    ///
    /// let err = Error::parse("unexpected end of input");
    /// assert!(err.to_string().contains("invalid JSON"));
    /// ```
    pub fn parse<T: fmt::Display>(msg: T) -> Self {
        Error::Parse(msg.to_string())
    }

    /// Creates a shape error for a non-object top-level value.
    ///
    /// `found` is the runtime type name of the offending value, e.g.
    /// `"array"` or `"number"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typetable::Error;
    ///
    /// let err = Error::shape("array");
    /// assert!(err.to_string().contains("found array"));
    /// ```
    pub fn shape(found: &str) -> Self {
        Error::Shape {
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for values outside the JSON data model.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
