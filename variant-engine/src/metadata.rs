//! Structured variant metadata
//!
//! The catalog collaborator stores `metadata` as an opaque string. When it
//! parses as JSON it carries attributes in one of two shapes; everything
//! else is `Unrecognized`, never an error. The decode is an explicit
//! discriminated parse rather than ad hoc optional field poking.

use crate::attribute_map::AttributeMap;
use serde::Deserialize;

/// One `{type, name, option}` entry from the typed-attribute form
#[derive(Debug, Clone, Deserialize)]
pub struct TypedAttribute {
    #[serde(default, rename = "type")]
    pub attribute_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub option: Option<String>,
}

/// Discriminated decode of a variant's metadata string
#[derive(Debug, Clone)]
pub enum MetadataForm {
    /// `{"attributes": [{type, name, option}, ...]}`
    Typed(Vec<TypedAttribute>),
    /// `{"attributeValues": {label: value, ...}}`
    Canonical(AttributeMap),
    /// Absent, malformed, or carrying neither shape
    Unrecognized,
}

/// Wire shapes, tried in priority order by the untagged decode
#[derive(Deserialize)]
#[serde(untagged)]
enum WireForm {
    Typed {
        attributes: Vec<TypedAttribute>,
    },
    Canonical {
        #[serde(rename = "attributeValues")]
        attribute_values: AttributeMap,
    },
}

impl MetadataForm {
    /// Decode a raw metadata string; any decode failure falls through to
    /// `Unrecognized`
    pub fn parse(metadata: Option<&str>) -> Self {
        let Some(raw) = metadata else {
            return Self::Unrecognized;
        };
        match serde_json::from_str::<WireForm>(raw) {
            Ok(WireForm::Typed { attributes }) => Self::Typed(attributes),
            Ok(WireForm::Canonical { attribute_values }) => Self::Canonical(attribute_values),
            Err(_) => Self::Unrecognized,
        }
    }
}
