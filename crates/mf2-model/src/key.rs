//! Variant keys

use serde::Deserialize;
use std::fmt;

/// One match key of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawKey")]
pub enum Key {
    /// A literal key such as `one` or `1`.
    Literal(String),
    /// The catch-all key `*`.
    Wildcard,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawKey {
    #[serde(rename = "literal")]
    Literal { value: String },
    #[serde(rename = "*")]
    CatchAll {},
}

impl From<RawKey> for Key {
    fn from(raw: RawKey) -> Self {
        match raw {
            RawKey::Literal { value } => Self::Literal(value),
            RawKey::CatchAll {} => Self::Wildcard,
        }
    }
}

impl Key {
    /// A literal key.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Whether this is `*`.
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// The literal text, `None` for `*`.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Wildcard => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.write_str(value),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

/// How the wildcards in a key set are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySetShape {
    /// No wildcard at all.
    Concrete,
    /// Every key is `*` (including the empty key set).
    CatchAll,
    /// A mix of `*` and literals.
    Partial,
}

/// The ordered keys of one variant, one per selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct VariantKeySet(Vec<Key>);

impl VariantKeySet {
    /// Wrap keys.
    pub const fn new(keys: Vec<Key>) -> Self {
        Self(keys)
    }

    /// The keys in selector order.
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify the wildcard distribution.
    pub fn shape(&self) -> KeySetShape {
        let wildcards = self.0.iter().filter(|key| key.is_wildcard()).count();
        if wildcards == self.0.len() {
            KeySetShape::CatchAll
        } else if wildcards == 0 {
            KeySetShape::Concrete
        } else {
            KeySetShape::Partial
        }
    }
}

impl fmt::Display for VariantKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mf2_common::join_labels(
            self.0.iter().map(ToString::to_string),
        ))
    }
}

impl FromIterator<Key> for VariantKeySet {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> VariantKeySet {
        raw.iter()
            .map(|k| if *k == "*" { Key::Wildcard } else { Key::literal(*k) })
            .collect()
    }

    #[test]
    fn test_shape() {
        assert_eq!(keys(&["one", "few"]).shape(), KeySetShape::Concrete);
        assert_eq!(keys(&["*", "*"]).shape(), KeySetShape::CatchAll);
        assert_eq!(keys(&["one", "*"]).shape(), KeySetShape::Partial);
        assert_eq!(keys(&[]).shape(), KeySetShape::CatchAll);
    }

    #[test]
    fn test_display() {
        assert_eq!(keys(&["one", "*"]).to_string(), "one *");
        assert_eq!(Key::Wildcard.to_string(), "*");
    }

    #[test]
    fn test_deserialize_keys() {
        let parsed: VariantKeySet = serde_json::from_str(
            r#"[{"type": "literal", "value": "one"}, {"type": "*"}, {"type": "*", "value": "other"}]"#,
        )
        .unwrap();
        assert_eq!(parsed, keys(&["one", "*", "*"]));
    }

    #[test]
    fn test_deserialize_rejects_unknown_key_type() {
        let parsed = serde_json::from_str::<Key>(r#"{"type": "number", "value": "1"}"#);
        assert!(parsed.is_err());
    }
}
