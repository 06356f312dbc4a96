use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::ValueShapeError;

/// A token's authored value.
///
/// Leaves are kept as text: numbers and booleans are stringified on load so
/// every resolved value can be written straight into a CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum RawValue {
    Scalar(String),
    Object(BTreeMap<String, RawValue>),
}

impl RawValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        RawValue::Scalar(value.into())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            RawValue::Scalar(s) => Some(s),
            RawValue::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, RawValue>> {
        match self {
            RawValue::Object(map) => Some(map),
            RawValue::Scalar(_) => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut BTreeMap<String, RawValue>> {
        match self {
            RawValue::Object(map) => Some(map),
            RawValue::Scalar(_) => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, RawValue::Object(_))
    }

    /// Look up a key of an object value. Scalars have no keys.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Look up a scalar leaf of an object value.
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(RawValue::as_scalar)
    }

    /// A key counts as present when it holds an object or a non-empty scalar.
    pub fn has(&self, key: &str) -> bool {
        match self.get(key) {
            Some(RawValue::Scalar(s)) => !s.is_empty(),
            Some(RawValue::Object(_)) => true,
            None => false,
        }
    }

    /// True for an object whose only key is `platform`.
    pub fn is_platform_only(&self) -> bool {
        self.as_object()
            .is_some_and(|map| map.len() == 1 && map.contains_key("platform"))
    }
}

impl TryFrom<serde_json::Value> for RawValue {
    type Error = ValueShapeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(RawValue::Scalar(s)),
            Value::Number(n) => Ok(RawValue::Scalar(n.to_string())),
            Value::Bool(b) => Ok(RawValue::Scalar(b.to_string())),
            Value::Object(map) => {
                let mut out = BTreeMap::new();
                for (key, value) in map {
                    out.insert(key, RawValue::try_from(value)?);
                }
                Ok(RawValue::Object(out))
            }
            Value::Array(_) => Err(ValueShapeError { kind: "array" }),
            Value::Null => Err(ValueShapeError { kind: "null" }),
        }
    }
}

/// The authored (pre-transform) side of a token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Original {
    pub value: RawValue,
}

/// A named design value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    /// Kebab-case identifier, also the CSS custom property name.
    pub name: String,
    /// Location in the source document; `{a.b.c}` references resolve against it.
    #[serde(default)]
    pub path: Vec<String>,
    /// Transformed scalar value used outside custom-property output.
    #[serde(default, deserialize_with = "scalar_text")]
    pub value: String,
    pub original: Original,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Token {
    /// Build a token whose path is derived from its name.
    pub fn new(name: impl Into<String>, original: RawValue) -> Self {
        let name = name.into();
        let value = original.as_scalar().unwrap_or_default().to_string();
        Self {
            path: name.split('-').map(str::to_string).collect(),
            name,
            value,
            original: Original { value: original },
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_path(mut self, path: &[&str]) -> Self {
        self.path = path.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn path_key(&self) -> String {
        self.path.join(".")
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawValue::deserialize(deserializer)? {
        RawValue::Scalar(s) => Ok(s),
        // Composite transformed values are never emitted directly.
        RawValue::Object(_) => Ok(String::new()),
    }
}

/// A resolution dimension: unconditional output or one of the media-query variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Default,
    ForcedColors,
    PrefersContrast,
}

impl Axis {
    /// Output order of the axis blocks within a file.
    pub const ALL: [Axis; 3] = [Axis::Default, Axis::ForcedColors, Axis::PrefersContrast];

    /// Key of this axis inside a structured original value.
    pub fn key(self) -> &'static str {
        match self {
            Axis::Default => "default",
            Axis::ForcedColors => "forcedColors",
            Axis::PrefersContrast => "prefersContrast",
        }
    }

    /// The media feature wrapping this axis, if any.
    pub fn media_query(self) -> Option<&'static str> {
        match self {
            Axis::Default => None,
            Axis::ForcedColors => Some("forced-colors"),
            Axis::PrefersContrast => Some("prefers-contrast"),
        }
    }
}

/// A provenance dimension for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The top level of the original value (no surface key).
    Root,
    Shared,
    Brand,
    Platform,
}

impl Surface {
    pub fn key(self) -> Option<&'static str> {
        match self {
            Surface::Root => None,
            Surface::Shared => Some("shared"),
            Surface::Brand => Some("brand"),
            Surface::Platform => Some("platform"),
        }
    }
}
