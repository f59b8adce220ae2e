//! # variant-engine
//!
//! Variant attribute normalization and faceted selection.
//!
//! ## Scope
//!
//! This crate handles HOW a buyer narrows an arbitrary, inconsistently
//! shaped set of purchasable variants down to exactly one:
//! - Normalizing one raw variant into a canonical attribute map
//! - Aggregating variants into a deduplicated attribute catalog
//! - Computing which facet values stay choosable under a partial selection
//! - Resolving a complete selection to a unique variant
//!
//! Everything around it stays in application code: fetching variant lists,
//! stock checks and commit-to-order-line, checkout, rendering. The engine
//! is pure and synchronous; both the POS surface and the storefront
//! surface consume this one implementation.
//!
//! ## Example
//!
//! ```ignore
//! use variant_engine::{
//!     ResolutionOutcome, SelectionState, all_selected, available_values, build_catalog, resolve,
//! };
//!
//! let variants = fetch_variants(product_id).await?;
//! let catalog = build_catalog(&variants);
//! if catalog.is_empty() {
//!     // No faceted selection possible; present the raw variant list.
//! }
//!
//! let mut selection = SelectionState::new();
//! selection.select("Color", "Red");
//! let sizes = available_values("Size", &catalog, &variants, &selection);
//! selection.select("Size", "42");
//!
//! if all_selected(&catalog, &selection) {
//!     if let ResolutionOutcome::Unique { variant } = resolve(&variants, &selection) {
//!         catalog.ensure_valid_for(&variants)?;
//!         if variant.is_in_stock() {
//!             commit_to_order_line(product_id, &variant.id, 1).await?;
//!         }
//!     }
//! }
//! ```

mod attribute_map;
mod catalog;
mod error;
mod facet;
mod metadata;
mod normalize;
mod resolve;
mod selection;
mod serde_helpers;
mod variant;

// Re-exports
pub use attribute_map::AttributeMap;
pub use catalog::{AttributeCatalog, AttributeDescriptor, build_catalog, build_catalog_with};
pub use error::{EngineError, EngineResult};
pub use facet::{all_selected, available_values, available_values_with};
pub use metadata::{MetadataForm, TypedAttribute};
pub use normalize::{NamePolicy, label, normalize, normalize_with};
pub use resolve::{ResolutionOutcome, resolve, resolve_with};
pub use selection::SelectionState;
pub use variant::RawVariant;
