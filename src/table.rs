//! Flattening a schema tree into render-ready table rows.
//!
//! This module converts a [`SchemaTree`] into a [`TypeTable`]: an ordered
//! sequence of [`DisplayRow`]s carrying the indent and colspan bookkeeping a
//! renderer needs to draw a tree-shaped but column-aligned table.
//!
//! ## Alignment model
//!
//! Every row's name cell spans `max_depth - level + 1` columns and is
//! preceded by `level` empty indent cells, so the name column's right edge
//! lines up across the whole table:
//!
//! ```text
//! | Key          | Type     |
//! | a            | Object   |
//! |  | b         | number   |
//! | c            | string   |
//! ```
//!
//! The law `span + level == max_depth + 1` holds for every row.
//!
//! ## Examples
//!
//! ```rust
//! use typetable::table_from_str;
//!
//! let table = table_from_str(r#"{"a": {"b": 2}}"#).unwrap();
//! assert_eq!(table.width(), 2);
//!
//! let rows = table.rows();
//! assert_eq!((rows[0].level, rows[0].span), (0, 2));
//! assert_eq!((rows[1].level, rows[1].span), (1, 1));
//! ```

use crate::schema::{SchemaNode, SchemaTree};

/// One flattened, render-ready row of the type table.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRow {
    /// The field name shown in the Key column.
    pub name: String,
    /// The type label shown in the Type column, e.g. `"Object[]"` or `"number"`.
    pub value_type: String,
    /// Indentation depth: the number of ancestors this row has in the schema
    /// tree, and the number of empty leading cells a renderer emits.
    pub level: usize,
    /// Number of columns the name cell spans, so every row's Key cell ends at
    /// the same table column.
    pub span: usize,
    /// Dotted path of the enclosing rows (empty at the top level). Used only
    /// to build stable per-row keys, not for data semantics.
    pub parent_path: String,
}

impl DisplayRow {
    /// Returns a stable identifier for this row, unique within one table.
    ///
    /// Top-level rows use `row-{name}`; nested rows fold in the parent path
    /// and level so repeated field names at different depths stay distinct.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typetable::table_from_str;
    ///
    /// let table = table_from_str(r#"{"a": {"b": 1}}"#).unwrap();
    /// assert_eq!(table.rows()[0].key(), "row-a");
    /// assert_eq!(table.rows()[1].key(), "row-a-b-1");
    /// ```
    #[must_use]
    pub fn key(&self) -> String {
        if self.level == 0 {
            format!("row-{}", self.name)
        } else {
            format!("row-{}-{}-{}", self.parent_path, self.name, self.level)
        }
    }
}

/// The flattened table: ordered rows plus the global column width.
///
/// Derived and read-only; rebuilt by [`SchemaTree::flatten`] whenever a new
/// schema is inferred.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeTable {
    rows: Vec<DisplayRow>,
    width: usize,
}

impl TypeTable {
    /// Returns the rows in pre-order depth-first sequence.
    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Returns the number of sub-columns the Key column occupies
    /// (`max_depth + 1`). The header's Key cell spans exactly this width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows, which equals the schema tree's node count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl SchemaTree {
    /// Flattens this schema tree into a [`TypeTable`].
    ///
    /// Pre-order depth-first: each node contributes exactly one row at the
    /// moment it is visited, before its children. Container rows (`Object`,
    /// `Object[]`) are emitted like any other, so row count equals node
    /// count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typetable::{from_str, infer};
    ///
    /// let value = from_str(r#"{"a": [{"b": 1}]}"#).unwrap();
    /// let table = infer(&value).unwrap().flatten();
    ///
    /// let types: Vec<_> = table.rows().iter().map(|r| r.value_type.as_str()).collect();
    /// assert_eq!(types, vec!["Object[]", "number"]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> TypeTable {
        let width = self.max_depth() + 1;
        let mut rows = Vec::with_capacity(self.node_count());
        push_rows(&mut rows, self.children(), 0, "", width);
        TypeTable { rows, width }
    }
}

fn push_rows(
    rows: &mut Vec<DisplayRow>,
    nodes: &[SchemaNode],
    level: usize,
    parent_path: &str,
    width: usize,
) {
    for node in nodes {
        rows.push(DisplayRow {
            name: node.name.clone(),
            value_type: node.label(),
            level,
            span: width - level,
            parent_path: parent_path.to_string(),
        });

        let children = node.children();
        if !children.is_empty() {
            let child_path = if parent_path.is_empty() {
                node.name.clone()
            } else {
                format!("{}.{}", parent_path, node.name)
            };
            push_rows(rows, children, level + 1, &child_path, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infer, sample};

    fn table_of(value: &crate::JsonValue) -> TypeTable {
        infer(value).unwrap().flatten()
    }

    #[test]
    fn test_empty_object_yields_no_rows() {
        let table = table_of(&sample!({}));
        assert!(table.is_empty());
        assert_eq!(table.width(), 1);
    }

    #[test]
    fn test_single_primitive_row() {
        let table = table_of(&sample!({"a": 1}));
        assert_eq!(table.len(), 1);

        let row = &table.rows()[0];
        assert_eq!(row.name, "a");
        assert_eq!(row.value_type, "number");
        assert_eq!(row.level, 0);
        assert_eq!(row.span, 1);
        assert_eq!(row.parent_path, "");
    }

    #[test]
    fn test_nested_object_rows() {
        let table = table_of(&sample!({"a": {"b": 2}}));
        assert_eq!(table.width(), 2);

        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            (rows[0].name.as_str(), rows[0].value_type.as_str(), rows[0].level),
            ("a", "Object", 0)
        );
        assert_eq!(
            (rows[1].name.as_str(), rows[1].value_type.as_str(), rows[1].level),
            ("b", "number", 1)
        );
    }

    #[test]
    fn test_preorder_sequence() {
        let table = table_of(&sample!({
            "a": {"b": 1, "c": {"d": 2}},
            "e": 3
        }));

        let names: Vec<_> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_row_count_equals_node_count() {
        let value = sample!({
            "a": {"b": [{"c": 1, "d": {"e": 2}}]},
            "f": [1, 2],
            "g": null
        });
        let tree = infer(&value).unwrap();
        assert_eq!(tree.flatten().len(), tree.node_count());
    }

    #[test]
    fn test_span_law_holds_everywhere() {
        let value = sample!({
            "a": {"b": {"c": {"d": 1}}},
            "e": [{"f": 2}],
            "g": "shallow"
        });
        let tree = infer(&value).unwrap();
        let table = tree.flatten();
        for row in table.rows() {
            assert_eq!(row.span + row.level, tree.max_depth() + 1);
        }
    }

    #[test]
    fn test_shallow_rows_span_full_width() {
        let table = table_of(&sample!({"deep": {"x": {"y": 1}}, "flat": true}));
        let flat = table.rows().iter().find(|r| r.name == "flat").unwrap();
        assert_eq!(flat.span, table.width());
    }

    #[test]
    fn test_row_keys_are_stable_and_unique() {
        let table = table_of(&sample!({
            "a": {"id": 1},
            "b": {"id": 2}
        }));

        let keys: Vec<_> = table.rows().iter().map(DisplayRow::key).collect();
        assert_eq!(keys, vec!["row-a", "row-a-id-1", "row-b", "row-b-id-1"]);

        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn test_parent_path_is_dotted() {
        let table = table_of(&sample!({"a": {"b": {"c": 1}}}));
        assert_eq!(table.rows()[2].parent_path, "a.b");
    }
}
