//! Typed subset of the Gemini structured-output response schema.
//!
//! Only the node types the pipelines need: objects, arrays, plain strings,
//! and enum-constrained strings. Serializes to the API's uppercase `type`
//! convention, e.g. `{"type": "ARRAY", "items": {...}}`.

use serde::Serialize;
use std::collections::BTreeMap;

/// A response-shape contract handed to the gateway alongside a prompt.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Schema {
    #[serde(rename = "OBJECT")]
    Object {
        properties: BTreeMap<String, Schema>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
    },
    #[serde(rename = "ARRAY")]
    Array { items: Box<Schema> },
    #[serde(rename = "STRING")]
    String {
        #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
        allowed: Option<Vec<String>>,
    },
}

impl Schema {
    /// Object node; every listed property is also marked required.
    pub fn object<I, K>(properties: I) -> Schema
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let properties: BTreeMap<String, Schema> = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        let required = properties.keys().cloned().collect();
        Schema::Object {
            properties,
            required,
        }
    }

    pub fn array(items: Schema) -> Schema {
        Schema::Array {
            items: Box::new(items),
        }
    }

    pub fn string() -> Schema {
        Schema::String { allowed: None }
    }

    /// String constrained to a fixed label set.
    pub fn string_enum<I, S>(labels: I) -> Schema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema::String {
            allowed: Some(labels.into_iter().map(Into::into).collect()),
        }
    }
}
