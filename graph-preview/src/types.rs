use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A single query string value, or every value of a repeated parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl ParamValue {
    /// First value of the parameter
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(values) => values.first().map(String::as_str),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                *self = Self::Many(vec![std::mem::take(existing), value]);
            }
            Self::Many(values) => values.push(value),
        }
    }
}

/// Preview query parameters sent by the CMS editor.
///
/// The well-known parameters get their own fields; anything else is kept in
/// `extra` and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctx: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_token: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, ParamValue>,
}

impl PreviewParams {
    /// Create parameters for a content key
    pub fn for_key<S: Into<String>>(key: S) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Collect query string pairs in arrival order.
    ///
    /// Known parameters keep their first value. Unknown parameters that repeat
    /// become a [`ParamValue::Many`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::default();

        for (name, value) in pairs {
            let name = name.into();
            let value = value.into();

            let slot = match name.as_str() {
                "key" => Some(&mut params.key),
                "loc" => Some(&mut params.loc),
                "ver" => Some(&mut params.ver),
                "ctx" => Some(&mut params.ctx),
                "preview_token" => Some(&mut params.preview_token),
                _ => None,
            };

            match slot {
                Some(slot) => {
                    if slot.is_none() {
                        *slot = Some(value);
                    }
                }
                None => match params.extra.entry(name) {
                    Entry::Occupied(mut entry) => entry.get_mut().push(value),
                    Entry::Vacant(entry) => {
                        entry.insert(ParamValue::Single(value));
                    }
                },
            }
        }

        params
    }

    /// Whether the editor opened the page in on-page edit mode
    pub fn is_edit_mode(&self) -> bool {
        self.ctx.as_deref() == Some("edit")
    }
}

/// A content item returned by the content graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewContent {
    /// GraphQL `__typename` of the item, which is its content type key
    pub content_type: Option<String>,
    pub key: Option<String>,
    pub version: Option<String>,
    pub locale: Option<String>,
    /// The item as returned by the graph
    pub data: Value,
}

impl PreviewContent {
    /// Build a content item from a raw graph item
    pub fn from_item(item: Value) -> Self {
        let metadata = item.get("_metadata");
        let text = |field: &str| {
            metadata
                .and_then(|m| m.get(field))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            content_type: item
                .get("__typename")
                .and_then(Value::as_str)
                .map(str::to_string),
            key: text("key"),
            version: text("version"),
            locale: text("locale"),
            data: item,
        }
    }
}
