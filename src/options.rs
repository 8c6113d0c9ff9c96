//! Configuration options for table rendering.
//!
//! [`RenderOptions`] controls formatting details of the two built-in
//! renderers. The row data itself (spans, levels, labels) is fixed by the
//! flattener; options only affect how that data is written out.
//!
//! ## Examples
//!
//! ```rust
//! use typetable::{table_from_str, to_html_with_options, RenderOptions};
//!
//! let table = table_from_str(r#"{"a": 1}"#).unwrap();
//!
//! // Compact single-line HTML
//! let compact = to_html_with_options(&table, &RenderOptions::new());
//!
//! // Readable HTML with newlines and indentation
//! let pretty = to_html_with_options(&table, &RenderOptions::pretty());
//! assert!(pretty.contains('\n'));
//! assert!(!compact.contains('\n'));
//! ```

/// Configuration for the HTML and plain-text renderers.
///
/// # Examples
///
/// ```rust
/// use typetable::RenderOptions;
///
/// // Default: compact HTML, 2-space text indent
/// let options = RenderOptions::new();
///
/// // Pretty HTML with 4-space indentation
/// let options = RenderOptions::pretty().with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Indentation unit, in spaces. Pretty HTML nests markup by this amount;
    /// the text renderer indents each row by `level * indent` spaces.
    pub indent: usize,
    /// When set, the HTML renderer emits newlines and indentation.
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl RenderOptions {
    /// Creates default options (compact HTML, 2-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typetable::RenderOptions;
    ///
    /// let options = RenderOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed HTML output.
    #[must_use]
    pub fn pretty() -> Self {
        RenderOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typetable::RenderOptions;
    ///
    /// let options = RenderOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
