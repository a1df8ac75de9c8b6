use std::collections::HashSet;

use indexmap::IndexMap;

/// A node in the response document returned by the RIPE REST interface.
///
/// The payload nests attribute entries under arbitrary combinations of
/// objects and arrays (`objects.object[].attributes.attribute[]` on the
/// current endpoint, but nothing here relies on that exact path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(String),
    List(Vec<Node>),
    Map(IndexMap<String, Node>),
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Leaf(String::new()),
            serde_json::Value::Bool(b) => Node::Leaf(b.to_string()),
            serde_json::Value::Number(n) => Node::Leaf(n.to_string()),
            serde_json::Value::String(s) => Node::Leaf(s),
            serde_json::Value::Array(items) => {
                Node::List(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(fields) => Node::Map(
                fields
                    .into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
        }
    }
}

/// Attribute name (as it appears in the document) to the values found for it,
/// in traversal order.
pub type ActualValues = IndexMap<String, Vec<String>>;

/// Collect the values of the requested attributes from a response document.
///
/// An attribute entry is any map node carrying leaf `name` and `value`
/// fields. Entries are matched against `attributes` by their upper-cased
/// name; the walk continues below every node regardless of a match, since
/// entries can sit arbitrarily deep under wrapper containers. Traversal is
/// field order then list order, so the result is stable across repeated
/// calls on the same document.
///
/// An attribute that never occurs yields no key at all, which the evaluator
/// treats differently from an empty value list.
pub fn flatten(doc: &Node, attributes: &HashSet<String>) -> ActualValues {
    let mut found = ActualValues::new();
    walk(doc, attributes, &mut found);
    found
}

fn walk(node: &Node, attributes: &HashSet<String>, found: &mut ActualValues) {
    match node {
        Node::Leaf(_) => {}
        Node::List(items) => {
            for item in items {
                walk(item, attributes, found);
            }
        }
        Node::Map(fields) => {
            if let (Some(Node::Leaf(name)), Some(Node::Leaf(value))) =
                (fields.get("name"), fields.get("value"))
            {
                if attributes.contains(&name.to_uppercase()) {
                    record(found, name, value);
                }
            }
            for child in fields.values() {
                walk(child, attributes, found);
            }
        }
    }
}

// The first-seen casing of an attribute name owns the key; later occurrences
// that differ only in case are appended under it.
fn record(found: &mut ActualValues, name: &str, value: &str) {
    let existing = found
        .iter_mut()
        .find(|(key, _)| key.to_uppercase() == name.to_uppercase());

    match existing {
        Some((_, values)) => values.push(value.to_string()),
        None => {
            found.insert(name.to_string(), vec![value.to_string()]);
        }
    }
}
