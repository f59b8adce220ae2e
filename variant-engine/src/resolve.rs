//! Variant resolution
//!
//! Matches a complete selection back to a concrete variant. `Unique` does
//! not imply purchasability: the caller still checks stock before commit,
//! because "can view but cannot currently buy" is a different state from
//! "does not exist".

use crate::normalize::{NamePolicy, normalize_with};
use crate::selection::SelectionState;
use crate::variant::RawVariant;
use serde::Serialize;
use tracing::warn;

/// Outcome of matching a complete selection against the variant list
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum ResolutionOutcome<'a> {
    /// Exactly one variant carries the selected attributes
    #[serde(rename = "unique")]
    Unique { variant: &'a RawVariant },
    /// The combination exists in the catalog's cross-product but no
    /// concrete variant was ever created for it
    #[serde(rename = "none")]
    NoMatch,
    /// Two or more variants carry identical attributes; surfaced as a
    /// data-quality condition, tie-break left to the caller
    #[serde(rename = "ambiguous")]
    Ambiguous { variants: Vec<&'a RawVariant> },
}

impl ResolutionOutcome<'_> {
    /// The resolved variant, when the outcome is `Unique`
    pub fn unique(&self) -> Option<&RawVariant> {
        match self {
            Self::Unique { variant } => Some(variant),
            _ => None,
        }
    }
}

/// Resolve a complete selection with the default name policy
///
/// Call only once [`crate::all_selected`] holds; recompute on every
/// selection change rather than caching, the cost is linear in variant
/// count.
pub fn resolve<'a>(
    variants: &'a [RawVariant],
    selection: &SelectionState,
) -> ResolutionOutcome<'a> {
    resolve_with(variants, selection, &NamePolicy::default())
}

/// [`resolve`] with an explicit name policy
pub fn resolve_with<'a>(
    variants: &'a [RawVariant],
    selection: &SelectionState,
    policy: &NamePolicy,
) -> ResolutionOutcome<'a> {
    let mut matched: Vec<&RawVariant> = variants
        .iter()
        .filter(|v| selection.matches(&normalize_with(v, policy)))
        .collect();

    match matched.len() {
        0 => ResolutionOutcome::NoMatch,
        1 => ResolutionOutcome::Unique {
            variant: matched.remove(0),
        },
        count => {
            warn!(count, "multiple variants share identical attributes");
            ResolutionOutcome::Ambiguous { variants: matched }
        }
    }
}
