//! View derivation layer.
//!
//! A [`Lens`] is a path into the store's root bound to a [`Store`] handle.
//! Reads are pull-based: recomputed from the current root on every call,
//! never cached. Writes are whole-root replaces built from an immutable
//! structural update at the path, so sibling data is untouched and readers
//! holding an earlier snapshot never see a torn value.

use crate::store::Store;
use serde_json::{Map, Value};
use std::fmt;

/// A field name or a sequence of nested field names addressing a sub-value
/// of the root. Paths address object fields only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    pub fn nested<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for Path {
    fn from(name: &str) -> Self {
        Path::field(name)
    }
}

impl From<Vec<&str>> for Path {
    fn from(segments: Vec<&str>) -> Self {
        Path::nested(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Value at `path` inside `root`, if the whole spine exists.
pub fn value_at<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut node = root;
    for segment in path.segments() {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// Immutable structural update: rebuild the spine along `path` so that the
/// addressed position holds `leaf`, leaving every sibling untouched.
/// Non-object nodes along the spine (including a missing one) are replaced
/// by objects, so the update is total.
pub fn with_value_at(root: Value, path: &Path, leaf: Value) -> Value {
    assoc(root, path.segments(), leaf)
}

fn assoc(node: Value, segments: &[String], leaf: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return leaf;
    };
    let mut fields = match node {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    let child = fields.remove(head).unwrap_or(Value::Null);
    fields.insert(head.clone(), assoc(child, rest, leaf));
    Value::Object(fields)
}

/// A path bound to a store: localized read/write without knowledge of the
/// rest of the root's shape.
#[derive(Clone)]
pub struct Lens {
    store: Store,
    path: Path,
}

impl Lens {
    pub fn new(store: Store, path: impl Into<Path>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current value at the path, `Null` when absent. Recomputed from the
    /// committed root on every call.
    pub fn read(&self) -> Value {
        value_at(&self.store.read(), &self.path)
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Replace the value at the path, keeping all siblings, as one atomic
    /// whole-root replace.
    pub fn set(&self, value: Value) {
        self.store
            .update(|root| with_value_at(root, &self.path, value));
    }

    /// `set(f(read()))` as a single exclusive step: no other replace can
    /// commit between the read and the write.
    pub fn modify(&self, f: impl FnOnce(Value) -> Value) {
        self.store.update(|root| {
            let current = value_at(&root, &self.path)
                .cloned()
                .unwrap_or(Value::Null);
            with_value_at(root, &self.path, f(current))
        });
    }
}
