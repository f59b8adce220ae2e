//! Attribute normalization
//!
//! Converts one raw variant record into a canonical attribute map, trying
//! several representations in a fixed priority order. Imported catalogs
//! rarely share a schema, so the chain degrades gracefully instead of
//! rejecting data: a variant no strategy can read yields an empty map.

use crate::attribute_map::AttributeMap;
use crate::metadata::{MetadataForm, TypedAttribute};
use crate::variant::RawVariant;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Known attribute labels
pub mod label {
    pub const COLOR: &str = "Color";
    pub const SIZE: &str = "Size";
    pub const MATERIAL: &str = "Material";
    pub const STYLE: &str = "Style";
    /// Fallback for typed metadata entries with no usable name
    pub const GENERIC: &str = "Attribute";
}

/// `Label: Value` segments separated by `|`
static LABELED_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^:|]+):\s*([^|]+)").unwrap());

/// Dash or en-dash with optional surrounding whitespace
static POSITIONAL_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[-\u{2013}]\s*").unwrap());

/// Tenant-configurable policy for the positional name heuristic
///
/// A name like "Red - 42" carries no labels, so the dash-split heuristic
/// has to assume an ordering. The default assumes `Color - Size`, which
/// holds for most imported catalogs but not all; tenants whose naming
/// convention differs ("Material - Color") override the ordering here.
#[derive(Debug, Clone, Deserialize)]
pub struct NamePolicy {
    /// Labels assigned to the two dash-separated segments, in order
    #[serde(default = "default_positional_labels")]
    pub positional_labels: [String; 2],
}

fn default_positional_labels() -> [String; 2] {
    [label::COLOR.to_string(), label::SIZE.to_string()]
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            positional_labels: default_positional_labels(),
        }
    }
}

/// Normalize one variant with the default name policy
///
/// Never fails; a variant no strategy can read yields an empty map and the
/// caller falls back to flat variant selection.
pub fn normalize(variant: &RawVariant) -> AttributeMap {
    normalize_with(variant, &NamePolicy::default())
}

/// Normalize one variant, first non-empty strategy wins:
///
/// 1. explicit `attribute_values` map (already canonical)
/// 2. structured metadata, typed-attribute form
/// 3. structured metadata, pre-canonical form
/// 4. direct `color` / `size` scalar fields
/// 5. labeled name form (`Color: Blue | Size: 40`)
/// 6. positional name form (`Red - 42`, ordering per `policy`)
pub fn normalize_with(variant: &RawVariant, policy: &NamePolicy) -> AttributeMap {
    if !variant.attribute_values.is_empty() {
        return variant.attribute_values.clone();
    }

    match MetadataForm::parse(variant.metadata.as_deref()) {
        MetadataForm::Typed(entries) => {
            let map = from_typed_entries(&entries);
            if !map.is_empty() {
                return map;
            }
        }
        MetadataForm::Canonical(map) if !map.is_empty() => return map,
        _ => {}
    }

    let mut map = AttributeMap::new();
    if let Some(color) = variant.color.as_deref() {
        map.insert(label::COLOR, color);
    }
    if let Some(size) = variant.size.as_deref() {
        map.insert(label::SIZE, size);
    }
    if !map.is_empty() {
        return map;
    }

    if let Some(map) = labeled_pairs(&variant.name) {
        return map;
    }
    positional_pairs(variant, policy).unwrap_or_default()
}

/// Map typed metadata entries to canonical pairs (last-wins on duplicates)
fn from_typed_entries(entries: &[TypedAttribute]) -> AttributeMap {
    let mut map = AttributeMap::new();
    for entry in entries {
        let Some(option) = entry
            .option
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
        else {
            continue;
        };
        let key = match entry.attribute_type.as_deref() {
            Some("color") => label::COLOR.to_string(),
            Some("size") => label::SIZE.to_string(),
            Some("material") => label::MATERIAL.to_string(),
            Some("style") => label::STYLE.to_string(),
            _ => entry
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(label::GENERIC)
                .to_string(),
        };
        map.insert(key, option);
    }
    map
}

/// Scan a display name for `Label: Value` pairs separated by `|`
fn labeled_pairs(name: &str) -> Option<AttributeMap> {
    let mut map = AttributeMap::new();
    for caps in LABELED_PAIR.captures_iter(name) {
        map.insert(caps[1].trim(), caps[2].trim());
    }
    (!map.is_empty()).then_some(map)
}

/// Split a display name on a dash; two parts take the positional labels,
/// a single part is labeled by the variant's `type` hint when present
fn positional_pairs(variant: &RawVariant, policy: &NamePolicy) -> Option<AttributeMap> {
    let parts: Vec<&str> = POSITIONAL_SPLIT
        .split(variant.name.trim())
        .filter(|p| !p.is_empty())
        .collect();

    let mut map = AttributeMap::new();
    match parts.as_slice() {
        [first, second] => {
            let [first_label, second_label] = &policy.positional_labels;
            map.insert(first_label.clone(), *first);
            map.insert(second_label.clone(), *second);
        }
        [only] => {
            let hint = variant
                .variant_type
                .as_deref()
                .map(str::trim)
                .filter(|h| !h.is_empty())?;
            map.insert(label_for_hint(hint), *only);
        }
        _ => return None,
    }
    (!map.is_empty()).then_some(map)
}

fn label_for_hint(hint: &str) -> String {
    match hint {
        "color" => label::COLOR.to_string(),
        "size" => label::SIZE.to_string(),
        other => other.to_string(),
    }
}
