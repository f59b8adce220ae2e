//! Attribute catalog
//!
//! Aggregates the normalized attribute maps of every variant of a product
//! into a deduplicated catalog of choosable attributes. A catalog is a
//! snapshot of the exact variant list it was built from; the fingerprint
//! lets callers detect mid-session edits and re-validate before commit.

use crate::error::{EngineError, EngineResult};
use crate::normalize::{NamePolicy, normalize_with};
use crate::variant::RawVariant;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

/// One choosable attribute and its possible values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDescriptor {
    pub name: String,
    /// Deduplicated, ascending string order
    pub values: Vec<String>,
}

/// Catalog of choosable attributes for one product
///
/// Attribute order is first-seen across the variant list; value order is
/// simple ascending string order, locale-naive, so the UI ordering is
/// deterministic. An empty catalog means no faceted selection is possible
/// and the caller presents the raw variant list directly.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeCatalog {
    attributes: Vec<AttributeDescriptor>,
    fingerprint: String,
}

impl AttributeCatalog {
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Check this catalog is still valid for `variants`
    ///
    /// A catalog is only valid for the exact variant list it was built
    /// from; callers re-validate on commit to catch concurrent edits.
    /// Stock changes are excluded from the fingerprint and never
    /// invalidate.
    pub fn ensure_valid_for(&self, variants: &[RawVariant]) -> EngineResult<()> {
        if fingerprint(variants) == self.fingerprint {
            Ok(())
        } else {
            Err(EngineError::StaleCatalog)
        }
    }
}

/// Build the attribute catalog for a product's variant list
pub fn build_catalog(variants: &[RawVariant]) -> AttributeCatalog {
    build_catalog_with(variants, &NamePolicy::default())
}

/// Build the attribute catalog with an explicit name policy
#[instrument(skip_all, fields(variants = variants.len()))]
pub fn build_catalog_with(variants: &[RawVariant], policy: &NamePolicy) -> AttributeCatalog {
    let mut attributes: Vec<AttributeDescriptor> = Vec::new();
    for variant in variants {
        for (name, value) in normalize_with(variant, policy).iter() {
            let idx = match attributes.iter().position(|d| d.name == name) {
                Some(idx) => idx,
                None => {
                    attributes.push(AttributeDescriptor {
                        name: name.to_string(),
                        values: Vec::new(),
                    });
                    attributes.len() - 1
                }
            };
            let values = &mut attributes[idx].values;
            if let Err(pos) = values.binary_search_by(|v| v.as_str().cmp(value)) {
                values.insert(pos, value.to_string());
            }
        }
    }
    attributes.retain(|d| !d.values.is_empty());
    debug!(attributes = attributes.len(), "catalog built");
    AttributeCatalog {
        attributes,
        fingerprint: fingerprint(variants),
    }
}

/// SHA-256 over the attribute-bearing fields of the variant list
///
/// Stock is deliberately left out: a stock edit changes purchasability,
/// not the catalog.
fn fingerprint(variants: &[RawVariant]) -> String {
    let mut hasher = Sha256::new();
    for variant in variants {
        hash_field(&mut hasher, Some(&variant.id));
        hash_field(&mut hasher, Some(&variant.name));
        hash_field(&mut hasher, variant.sku.as_deref());
        hash_field(
            &mut hasher,
            variant.price.map(|p| p.to_string()).as_deref(),
        );
        hash_field(&mut hasher, variant.variant_type.as_deref());
        hash_field(&mut hasher, variant.color.as_deref());
        hash_field(&mut hasher, variant.size.as_deref());
        hash_field(&mut hasher, variant.metadata.as_deref());
        for (name, value) in variant.attribute_values.iter() {
            hash_field(&mut hasher, Some(name));
            hash_field(&mut hasher, Some(value));
        }
        hasher.update([0xfe]);
    }
    hex::encode(hasher.finalize())
}

fn hash_field(hasher: &mut Sha256, value: Option<&str>) {
    match value {
        Some(v) => {
            hasher.update([1]);
            hasher.update((v.len() as u64).to_le_bytes());
            hasher.update(v.as_bytes());
        }
        None => hasher.update([0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn shoe_variants() -> Vec<RawVariant> {
        vec![
            RawVariant::new("v1", "Red - 40"),
            RawVariant::new("v2", "Red - 42"),
            RawVariant::new("v3", "Blue - 40"),
            RawVariant::new("v4", "Color: Green | Size: 38"),
        ]
    }

    #[test]
    fn test_first_seen_attribute_order_sorted_values() {
        let catalog = build_catalog(&shoe_variants());
        let names: Vec<&str> = catalog.attributes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Color", "Size"]);
        assert_eq!(
            catalog.get("Color").unwrap().values,
            vec!["Blue", "Green", "Red"]
        );
        assert_eq!(
            catalog.get("Size").unwrap().values,
            vec!["38", "40", "42"]
        );
    }

    #[test]
    fn test_catalog_completeness() {
        let variants = shoe_variants();
        let catalog = build_catalog(&variants);
        for variant in &variants {
            for (name, value) in normalize(variant).iter() {
                let descriptor = catalog.get(name).expect("attribute missing from catalog");
                assert!(descriptor.values.iter().any(|v| v == value));
            }
        }
    }

    #[test]
    fn test_unnormalizable_variants_yield_empty_catalog() {
        let variants = vec![
            RawVariant::new("v1", "Standard Kit"),
            RawVariant::new("v2", "Deluxe Kit Bundle"),
        ];
        let catalog = build_catalog(&variants);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_stock_edit_does_not_invalidate() {
        let mut variants = shoe_variants();
        let catalog = build_catalog(&variants);
        variants[0].stock = Some(99);
        assert!(catalog.ensure_valid_for(&variants).is_ok());
    }

    #[test]
    fn test_metadata_edit_invalidates() {
        let mut variants = shoe_variants();
        let catalog = build_catalog(&variants);
        variants[0].metadata = Some(r#"{"attributeValues":{"Color":"Black"}}"#.to_string());
        assert!(matches!(
            catalog.ensure_valid_for(&variants),
            Err(EngineError::StaleCatalog)
        ));
    }

    #[test]
    fn test_variant_removal_invalidates() {
        let mut variants = shoe_variants();
        let catalog = build_catalog(&variants);
        variants.pop();
        assert!(catalog.ensure_valid_for(&variants).is_err());
    }
}
