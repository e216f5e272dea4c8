//! Term trees.
//!
//! A [`TermTree`] is one language's resource file held in memory: a nested
//! mapping from key segments to either a string leaf or another tree. A term
//! key such as `"user.name"` addresses the leaf at `root["user"]["name"]`.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "user": {
//!     "name": "Name",
//!     "greeting": "Hi {0}, meet {1}"
//!   },
//!   "ok": "OK"
//! }
//! ```
//!
//! Numbers and booleans become leaves holding their JSON text. `null` and
//! arrays carry no term and are dropped. The root must be an object.

use std::collections::BTreeMap;

/// A node in a [`TermTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermNode {
    /// A translated string.
    Leaf(String),
    /// A nested group of terms.
    Branch(TermTree),
}

/// The loaded terms of a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTree {
    children: BTreeMap<String, TermNode>,
}

impl TermTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a tree from resource file content.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the content is not JSON or its root is not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexicon_rs_store::TermTree;
    ///
    /// let tree = TermTree::from_json_str(r#"{"user": {"name": "Name"}}"#).unwrap();
    /// assert_eq!(tree.lookup("user.name"), Some("Name"));
    /// assert_eq!(tree.lookup("user"), None);
    /// ```
    pub fn from_json_str(json_str: &str) -> Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(json_str).map_err(|e| format!("Invalid JSON: {e}"))?;
        Self::from_value(value)
    }

    /// Builds a tree from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `value` is not a JSON object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, String> {
        match value {
            serde_json::Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(format!(
                "Resource root must be a JSON object, found {}",
                json_kind(&other)
            )),
        }
    }

    fn from_map(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let children = map
            .into_iter()
            .filter_map(|(segment, value)| {
                let node = match value {
                    serde_json::Value::String(s) => TermNode::Leaf(s),
                    serde_json::Value::Number(n) => TermNode::Leaf(n.to_string()),
                    serde_json::Value::Bool(b) => TermNode::Leaf(b.to_string()),
                    serde_json::Value::Object(inner) => TermNode::Branch(Self::from_map(inner)),
                    serde_json::Value::Null | serde_json::Value::Array(_) => return None,
                };
                Some((segment, node))
            })
            .collect();
        Self { children }
    }

    /// Inserts a leaf at a dotted path, creating intermediate branches.
    ///
    /// A leaf standing where a branch is needed is replaced by the branch.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut current = self;
        for segment in segments {
            let entry = current
                .children
                .entry(segment.to_string())
                .or_insert_with(|| TermNode::Branch(Self::new()));
            if let TermNode::Leaf(_) = entry {
                *entry = TermNode::Branch(Self::new());
            }
            current = match entry {
                TermNode::Branch(next) => next,
                TermNode::Leaf(_) => return,
            };
        }
        current
            .children
            .insert(last.to_string(), TermNode::Leaf(value.into()));
    }

    /// Returns the direct child named `segment`.
    pub fn child(&self, segment: &str) -> Option<&TermNode> {
        self.children.get(segment)
    }

    /// Resolves a dotted key to its string leaf.
    ///
    /// Returns `None` if any segment is missing, if the path runs through a
    /// leaf, or if it ends on a branch.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.child(segments.next()?)?;
        for segment in segments {
            match node {
                TermNode::Branch(tree) => node = tree.child(segment)?,
                TermNode::Leaf(_) => return None,
            }
        }
        match node {
            TermNode::Leaf(text) => Some(text),
            TermNode::Branch(_) => None,
        }
    }

    /// Returns `true` if `key` resolves to a leaf.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns every leaf key in dotted form, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_keys("", &mut keys);
        keys
    }

    fn collect_keys(&self, prefix: &str, out: &mut Vec<String>) {
        for (segment, node) in &self.children {
            let path = if prefix.is_empty() {
                segment.clone()
            } else {
                format!("{prefix}.{segment}")
            };
            match node {
                TermNode::Leaf(_) => out.push(path),
                TermNode::Branch(tree) => tree.collect_keys(&path, out),
            }
        }
    }

    /// Returns the number of leaves in the tree.
    pub fn len(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                TermNode::Leaf(_) => 1,
                TermNode::Branch(tree) => tree.len(),
            })
            .sum()
    }

    /// Returns `true` if the tree has no leaves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
