//! Facet availability
//!
//! For each attribute, computes which of its values remain choosable
//! without contradicting the rest of the current selection. An attribute
//! is matched against all *other* choices, never its own, so a user can
//! always revise an earlier pick: selecting a value in one facet may
//! shrink other facets but never eliminates choices in its own.

use crate::catalog::AttributeCatalog;
use crate::normalize::{NamePolicy, normalize_with};
use crate::selection::SelectionState;
use crate::variant::RawVariant;

/// Values of `attribute_name` still consistent with the other choices
pub fn available_values(
    attribute_name: &str,
    catalog: &AttributeCatalog,
    variants: &[RawVariant],
    selection: &SelectionState,
) -> Vec<String> {
    available_values_with(
        attribute_name,
        catalog,
        variants,
        selection,
        &NamePolicy::default(),
    )
}

/// [`available_values`] with an explicit name policy
///
/// Returned values are distinct and in ascending string order, matching
/// the catalog's value ordering.
pub fn available_values_with(
    attribute_name: &str,
    catalog: &AttributeCatalog,
    variants: &[RawVariant],
    selection: &SelectionState,
    policy: &NamePolicy,
) -> Vec<String> {
    debug_assert!(
        catalog.get(attribute_name).is_some(),
        "attribute '{attribute_name}' is not in the catalog"
    );
    debug_assert!(
        selection.validate_against(catalog).is_ok(),
        "selection strayed outside the catalog"
    );

    let others = selection.without(attribute_name);
    let mut values: Vec<String> = Vec::new();
    for variant in variants {
        let map = normalize_with(variant, policy);
        if !others.matches(&map) {
            continue;
        }
        if let Some(value) = map.get(attribute_name) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }
    values.sort();
    values
}

/// True when every catalog attribute has a choice in `selection`
///
/// The caller's single gate for invoking [`crate::resolve`].
pub fn all_selected(catalog: &AttributeCatalog, selection: &SelectionState) -> bool {
    catalog
        .attributes()
        .iter()
        .all(|d| selection.get(&d.name).is_some())
}
