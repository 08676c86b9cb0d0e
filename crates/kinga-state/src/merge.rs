//! Structural merge primitives on the serialized document tree.

use kinga_core::FieldPath;
use serde_json::{Map, Value};

use crate::error::StateError;

/// Shallow-merge `partial` into the object at `path`.
///
/// Keys present in `partial` replace the node's values wholesale; keys
/// absent are left untouched, as is everything outside the node. Every key
/// must already exist in the node. Returns the keys written, in `partial`
/// order.
pub fn merge_at(
    root: &mut Value,
    path: &FieldPath,
    partial: Value,
) -> Result<Vec<String>, StateError> {
    let Value::Object(partial) = partial else {
        return Err(StateError::InvalidPartial {
            path: path.to_string(),
        });
    };

    let node = path
        .resolve_mut(root)
        .ok_or_else(|| StateError::PathNotFound {
            path: path.to_string(),
        })?;
    let Value::Object(node) = node else {
        return Err(StateError::NotAnObject {
            path: path.to_string(),
        });
    };

    if let Some(key) = partial.keys().find(|k| !node.contains_key(*k)) {
        return Err(StateError::UnknownField {
            path: path.to_string(),
            key: key.clone(),
        });
    }

    Ok(merge_shallow(node, partial))
}

/// Overwrite `node[k]` for every `k` in `partial`.
pub fn merge_shallow(node: &mut Map<String, Value>, partial: Map<String, Value>) -> Vec<String> {
    let mut written = Vec::with_capacity(partial.len());
    for (key, value) in partial {
        written.push(key.clone());
        node.insert(key, value);
    }
    written
}

/// The list at `path`, or the appropriate error if there is none.
pub fn list_at<'a>(root: &'a mut Value, path: &FieldPath) -> Result<&'a mut Vec<Value>, StateError> {
    let node = path
        .resolve_mut(root)
        .ok_or_else(|| StateError::PathNotFound {
            path: path.to_string(),
        })?;
    node.as_array_mut().ok_or_else(|| StateError::NotAList {
        path: path.to_string(),
    })
}

/// Object keys present in `candidate` that the typed document dropped when
/// it was deserialized; an empty result means the tree fits the schema.
pub fn unknown_keys(candidate: &Value, canonical: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_unknown(candidate, canonical, &FieldPath::root(), &mut out);
    out
}

fn collect_unknown(candidate: &Value, canonical: &Value, at: &FieldPath, out: &mut Vec<String>) {
    match (candidate, canonical) {
        (Value::Object(c), Value::Object(k)) => {
            for (key, value) in c {
                match k.get(key) {
                    Some(expected) => collect_unknown(value, expected, &at.child(key.as_str()), out),
                    None => out.push(at.child(key.as_str()).to_string()),
                }
            }
        }
        (Value::Array(c), Value::Array(k)) => {
            for (i, (value, expected)) in c.iter().zip(k).enumerate() {
                collect_unknown(value, expected, &at.index(i), out);
            }
        }
        _ => {}
    }
}
