//! Token trees: the recursive design-token data model.
//!
//! A token tree is an ordered mapping from key to node, where each node is a
//! scalar (string or number), a sequence of strings (e.g. a font-family
//! fallback chain), or a nested tree. The sum type makes merge recursion
//! explicit; ownership makes cycles unrepresentable.

use crate::error::FragmentError;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Maximum nesting depth accepted when converting raw values into a tree.
/// Raw fragments deeper than this are rejected as malformed.
pub const MAX_DEPTH: usize = 64;

/// A scalar token value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Str(String),
    Num(f64),
}

/// A single node in a token tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Scalar(Scalar),
    Sequence(Vec<String>),
    Tree(TokenTree),
}

impl TokenValue {
    /// Kind label used in merge diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenValue::Scalar(_) => "scalar",
            TokenValue::Sequence(_) => "sequence",
            TokenValue::Tree(_) => "table",
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Scalar(Scalar::Str(s))
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Scalar(Scalar::Num(n))
    }
}

/// Ordered mapping from token key to value. Keys are unique per level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenTree {
    entries: IndexMap<String, TokenValue>,
}

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value. An existing key keeps its position; new keys append.
    pub fn insert(&mut self, key: impl Into<String>, value: TokenValue) -> Option<TokenValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TokenValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, TokenValue> {
        self.entries.keys()
    }

    /// Convert a raw JSON value into a token tree.
    ///
    /// The root must be an object. `null`, booleans, non-string sequence
    /// elements, and nesting beyond [`MAX_DEPTH`] are rejected; the error
    /// carries the dotted path of the offending value.
    pub fn from_json(value: &Value) -> Result<Self, FragmentError> {
        convert_tree(value, &mut Vec::new())
    }
}

impl FromIterator<(String, TokenValue)> for TokenTree {
    fn from_iter<I: IntoIterator<Item = (String, TokenValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenTree {
    type Item = (&'a String, &'a TokenValue);
    type IntoIter = indexmap::map::Iter<'a, String, TokenValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn dotted(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

fn convert_tree(value: &Value, path: &mut Vec<String>) -> Result<TokenTree, FragmentError> {
    let Value::Object(map) = value else {
        return Err(FragmentError::new(
            dotted(path),
            "expected a table of token values",
        ));
    };
    if path.len() >= MAX_DEPTH {
        return Err(FragmentError::new(
            dotted(path),
            "nesting exceeds maximum depth",
        ));
    }
    let mut tree = TokenTree::new();
    for (key, val) in map {
        path.push(key.clone());
        let node = convert_value(val, path)?;
        path.pop();
        tree.insert(key.clone(), node);
    }
    Ok(tree)
}

fn convert_value(value: &Value, path: &mut Vec<String>) -> Result<TokenValue, FragmentError> {
    match value {
        Value::String(s) => Ok(TokenValue::Scalar(Scalar::Str(s.clone()))),
        Value::Number(n) => n
            .as_f64()
            .map(|f| TokenValue::Scalar(Scalar::Num(f)))
            .ok_or_else(|| FragmentError::new(dotted(path), "number is not representable")),
        Value::Array(items) => {
            let mut seq = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => seq.push(s.clone()),
                    other => {
                        return Err(FragmentError::new(
                            dotted(path),
                            format!("sequence elements must be strings, got {}", json_kind(other)),
                        ))
                    }
                }
            }
            Ok(TokenValue::Sequence(seq))
        }
        Value::Object(_) => Ok(TokenValue::Tree(convert_tree(value, path)?)),
        Value::Null => Err(FragmentError::new(dotted(path), "null is not a token value")),
        Value::Bool(_) => Err(FragmentError::new(
            dotted(path),
            "booleans are not token values",
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
