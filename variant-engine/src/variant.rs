//! Raw variant model
//!
//! One concretely purchasable version of a product, as received from the
//! catalog collaborator. The engine treats it as read-only input; attribute
//! encoding is inconsistent across import sources, which is exactly what
//! the normalizer exists to absorb.

use crate::attribute_map::AttributeMap;
use crate::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Variant record from the catalog collaborator
///
/// Every field except `id` is optional in the wire shape; attributes may
/// arrive as an explicit map, structured metadata, direct scalar fields,
/// or only encoded in the display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    pub id: String,
    /// Free-text label; may encode attributes ("Red - 42")
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// Accepts a JSON number or a numeric string
    #[serde(default, deserialize_with = "serde_helpers::decimal_flexible")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<i64>,
    /// Coarse category hint ("color", "size", ...)
    #[serde(default, rename = "type")]
    pub variant_type: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    /// Opaque string; may encode JSON (see [`crate::MetadataForm`])
    #[serde(default)]
    pub metadata: Option<String>,
    /// Already-canonical attribute map, when the source provides one
    #[serde(default)]
    pub attribute_values: AttributeMap,
}

impl RawVariant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: None,
            price: None,
            stock: None,
            variant_type: None,
            color: None,
            size: None,
            metadata: None,
            attribute_values: AttributeMap::new(),
        }
    }

    /// Caller-side stock gate; a resolved variant must still pass this
    /// before commit. Untracked stock (`None`) counts as available.
    pub fn is_in_stock(&self) -> bool {
        self.stock.is_none_or(|s| s > 0)
    }
}
