//! Schema inference over a sample JSON value.
//!
//! This module walks one concrete JSON object and produces a [`SchemaTree`]:
//! a nested description of field names, inferred types, and nesting depth.
//! No schema language is involved; the structure is read off a single sample.
//!
//! ## Classification
//!
//! Each object entry becomes exactly one [`SchemaNode`], tagged by [`Shape`]:
//!
//! | Value                          | Shape                               |
//! |--------------------------------|-------------------------------------|
//! | `null`                         | `Null`                              |
//! | undefined sentinel             | `Undefined`                         |
//! | scalar                         | `Primitive` (with type name/sample) |
//! | array, first element scalar    | `PrimitiveArray`                    |
//! | array, first element object    | `ObjectArray` (recurse, first only) |
//! | object                         | `Object` (recurse)                  |
//!
//! ## Array sampling policy
//!
//! For arrays of objects only the FIRST element is inspected. Elements beyond
//! index 0 are never looked at, so heterogeneous arrays lose information.
//! This is a deliberate sampling policy, kept cheap on purpose: one sample
//! value yields one schema.
//!
//! ## Examples
//!
//! ```rust
//! use typetable::{from_str, infer};
//!
//! let value = from_str(r#"{"user": {"id": 1, "name": "Alice"}}"#).unwrap();
//! let tree = infer(&value).unwrap();
//! assert_eq!(tree.max_depth(), 1);
//! assert_eq!(tree.node_count(), 3);
//! ```

use crate::{Error, JsonMap, JsonValue, Result};

/// The inferred type of one field, as a tagged union.
///
/// Children and primitive type names live inside the variants that have them,
/// so a primitive node with children is unrepresentable by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// The field held `null`.
    Null,
    /// The field held the undefined sentinel.
    Undefined,
    /// A scalar field. `type_name` is the runtime type name, `sample` the
    /// observed value (retained for display, not required by the table).
    Primitive {
        type_name: &'static str,
        sample: JsonValue,
    },
    /// An array whose first element is not an object (or an empty array, in
    /// which case `type_name` is `"undefined"` and `sample` is `None`).
    PrimitiveArray {
        type_name: &'static str,
        sample: Option<JsonValue>,
    },
    /// A nested object; children are its entries, in insertion order.
    Object(Vec<SchemaNode>),
    /// An array of objects; children are inferred from the first element only.
    ObjectArray(Vec<SchemaNode>),
}

impl Shape {
    /// Returns the display label used for the table's Type column.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typetable::Shape;
    ///
    /// assert_eq!(Shape::Null.label(), "null");
    /// assert_eq!(Shape::Object(vec![]).label(), "Object");
    /// assert_eq!(Shape::ObjectArray(vec![]).label(), "Object[]");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Shape::Null => "null".to_string(),
            Shape::Undefined => "undefined".to_string(),
            Shape::Primitive { type_name, .. } => (*type_name).to_string(),
            Shape::PrimitiveArray { type_name, .. } => format!("{}[]", type_name),
            Shape::Object(_) => "Object".to_string(),
            Shape::ObjectArray(_) => "Object[]".to_string(),
        }
    }

    /// Returns the node's children, empty for leaf shapes.
    #[must_use]
    pub fn children(&self) -> &[SchemaNode] {
        match self {
            Shape::Object(children) | Shape::ObjectArray(children) => children,
            _ => &[],
        }
    }

    /// Returns the primitive type name, if this shape has one.
    #[must_use]
    pub fn primitive_type(&self) -> Option<&'static str> {
        match self {
            Shape::Primitive { type_name, .. } | Shape::PrimitiveArray { type_name, .. } => {
                Some(type_name)
            }
            _ => None,
        }
    }
}

/// The inferred description of one field.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaNode {
    /// The object key this node was derived from.
    pub name: String,
    /// Object-nesting depth; the root object's direct entries are depth 0.
    pub depth: usize,
    /// The inferred type, including any nested children.
    pub shape: Shape,
}

impl SchemaNode {
    /// Returns the display label for this node's type.
    #[must_use]
    pub fn label(&self) -> String {
        self.shape.label()
    }

    /// Returns this node's children, empty for leaf nodes.
    #[must_use]
    pub fn children(&self) -> &[SchemaNode] {
        self.shape.children()
    }

    fn count(&self) -> usize {
        1 + self.children().iter().map(SchemaNode::count).sum::<usize>()
    }
}

/// The complete inferred schema for one sample object.
///
/// The root is synthetic: `children` are the top-level entries of the input
/// object. `max_depth` is the maximum depth reached anywhere in the tree and
/// sizes the indent/colspan columns uniformly for every row of the flattened
/// table.
///
/// A `SchemaTree` is rebuilt from scratch on every inference run and is
/// immutable once produced.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaTree {
    children: Vec<SchemaNode>,
    max_depth: usize,
}

impl SchemaTree {
    /// Returns the top-level inferred nodes, in the input object's key order.
    #[must_use]
    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }

    /// Returns the maximum nesting depth observed across the whole tree.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the total number of nodes in the tree.
    ///
    /// The flattened table has exactly this many rows.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.children.iter().map(SchemaNode::count).sum()
    }

    /// Returns `true` if the input object had no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Infers a [`SchemaTree`] from a sample JSON value.
///
/// The value must be a JSON object; named fields are what the table rows are
/// made of. Inference itself cannot fail on any well-formed object.
///
/// # Examples
///
/// ```rust
/// use typetable::{from_str, infer};
///
/// let value = from_str(r#"{"id": 1, "tags": ["a", "b"]}"#).unwrap();
/// let tree = infer(&value).unwrap();
/// assert_eq!(tree.node_count(), 2);
/// assert_eq!(tree.max_depth(), 0);
/// ```
///
/// # Errors
///
/// Returns [`Error::Shape`] if the top-level value is not an object.
pub fn infer(value: &JsonValue) -> Result<SchemaTree> {
    match value {
        JsonValue::Object(map) => {
            let (children, max_depth) = infer_entries(map, 0);
            Ok(SchemaTree {
                children,
                max_depth,
            })
        }
        other => Err(Error::shape(other.type_name())),
    }
}

/// Classifies every entry of `map` at the given depth.
///
/// Returns the nodes plus the running maximum depth for this subtree. The
/// maximum starts at `depth` itself: entering a nested object counts toward
/// the table width even when that object turns out to be empty.
fn infer_entries(map: &JsonMap, depth: usize) -> (Vec<SchemaNode>, usize) {
    let mut max_depth = depth;
    let mut nodes = Vec::with_capacity(map.len());

    for (key, value) in map.iter() {
        let shape = match value {
            JsonValue::Array(items) => match items.first() {
                Some(JsonValue::Object(first)) => {
                    // First-element sampling: index 0 stands in for the
                    // whole array.
                    let (children, d) = infer_entries(first, depth + 1);
                    max_depth = max_depth.max(d);
                    Shape::ObjectArray(children)
                }
                first => Shape::PrimitiveArray {
                    type_name: first.map_or("undefined", JsonValue::type_name),
                    sample: first.cloned(),
                },
            },
            JsonValue::Null => Shape::Null,
            JsonValue::Undefined => Shape::Undefined,
            JsonValue::Object(inner) => {
                let (children, d) = infer_entries(inner, depth + 1);
                max_depth = max_depth.max(d);
                Shape::Object(children)
            }
            scalar => Shape::Primitive {
                type_name: scalar.type_name(),
                sample: scalar.clone(),
            },
        };

        nodes.push(SchemaNode {
            name: key.clone(),
            depth,
            shape,
        });
    }

    (nodes, max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_empty_object() {
        let tree = infer(&sample!({})).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.max_depth(), 0);
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_flat_primitives() {
        let tree = infer(&sample!({
            "name": "Alice",
            "age": 30,
            "ratio": 0.5,
            "active": true
        }))
        .unwrap();

        assert_eq!(tree.max_depth(), 0);
        let labels: Vec<_> = tree.children().iter().map(|n| n.label()).collect();
        assert_eq!(labels, vec!["string", "number", "number", "boolean"]);
        assert!(tree.children().iter().all(|n| n.depth == 0));
    }

    #[test]
    fn test_primitive_sample_retained() {
        let tree = infer(&sample!({"age": 30})).unwrap();
        match &tree.children()[0].shape {
            Shape::Primitive { type_name, sample } => {
                assert_eq!(*type_name, "number");
                assert_eq!(sample, &JsonValue::from(30));
            }
            other => panic!("expected primitive, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_object_depth() {
        let tree = infer(&sample!({"a": {"b": {"c": 1}}})).unwrap();
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.node_count(), 3);

        let a = &tree.children()[0];
        assert_eq!(a.depth, 0);
        let b = &a.children()[0];
        assert_eq!(b.depth, 1);
        let c = &b.children()[0];
        assert_eq!(c.depth, 2);
        assert_eq!(c.label(), "number");
    }

    #[test]
    fn test_empty_nested_object_still_counts_for_depth() {
        let tree = infer(&sample!({"a": {}})).unwrap();
        assert_eq!(tree.max_depth(), 1);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_empty_array_is_undefined_element_type() {
        let tree = infer(&sample!({"items": []})).unwrap();
        let node = &tree.children()[0];
        assert_eq!(node.label(), "undefined[]");
        match &node.shape {
            Shape::PrimitiveArray { sample, .. } => assert!(sample.is_none()),
            other => panic!("expected primitive array, got {:?}", other),
        }
    }

    #[test]
    fn test_object_array_samples_first_element_only() {
        let tree = infer(&sample!({
            "items": [{"id": 1}, {"id": 2, "extra": "ignored"}]
        }))
        .unwrap();

        let items = &tree.children()[0];
        assert_eq!(items.label(), "Object[]");
        // The second element's "extra" field never appears.
        assert_eq!(items.children().len(), 1);
        assert_eq!(items.children()[0].name, "id");
    }

    #[test]
    fn test_array_of_null_first_element() {
        let tree = infer(&sample!({"xs": [null, 1]})).unwrap();
        assert_eq!(tree.children()[0].label(), "null[]");
    }

    #[test]
    fn test_array_of_arrays_first_element() {
        let tree = infer(&sample!({"grid": [[1, 2], [3]]})).unwrap();
        assert_eq!(tree.children()[0].label(), "array[]");
    }

    #[test]
    fn test_null_and_undefined_entries() {
        let tree = infer(&sample!({"a": null, "b": undefined})).unwrap();
        assert_eq!(tree.children()[0].shape, Shape::Null);
        assert_eq!(tree.children()[1].shape, Shape::Undefined);
        assert!(tree.children().iter().all(|n| n.children().is_empty()));
    }

    #[test]
    fn test_top_level_array_is_shape_error() {
        let err = infer(&sample!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
        assert!(err.to_string().contains("found array"));
    }

    #[test]
    fn test_top_level_scalar_is_shape_error() {
        let err = infer(&sample!(42)).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
        assert!(err.to_string().contains("found number"));
    }

    #[test]
    fn test_inference_is_deterministic() {
        let value = sample!({
            "a": {"b": [{"c": 1}]},
            "d": [true, false],
            "e": null
        });
        let first = infer(&value).unwrap();
        let second = infer(&value).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_order_preserved() {
        let value = crate::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let tree = infer(&value).unwrap();
        let names: Vec<_> = tree.children().iter().map(|n| n.name.clone()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
