//! End-to-end selection session scenarios
//!
//! Drives the full pipeline the way a picker UI does: deserialize the
//! collaborator payload, build the catalog once, then recompute facets on
//! every pick and resolve once the selection is complete.

use variant_engine::{
    EngineError, NamePolicy, RawVariant, ResolutionOutcome, SelectionState, all_selected,
    available_values, available_values_with, build_catalog, build_catalog_with, normalize,
    resolve, resolve_with,
};

/// Mixed-encoding payload in the shapes real imports produce
fn garment_payload() -> Vec<RawVariant> {
    serde_json::from_str(
        r#"[
            {"id": "g1", "name": "Red - S", "price": "29.90", "stock": 4},
            {"id": "g2", "name": "Red - M", "price": 29.9, "stock": 0},
            {"id": "g3", "name": "Color: Blue | Size: S", "stock": 2},
            {
                "id": "g4",
                "name": "Blue medium",
                "metadata": "{\"attributes\":[{\"type\":\"color\",\"option\":\"Blue\"},{\"type\":\"size\",\"option\":\"M\"}]}",
                "stock": 1
            },
            {
                "id": "g5",
                "name": "irrelevant label",
                "attributeValues": {"Color": "Green", "Size": "M"},
                "stock": 6
            }
        ]"#,
    )
    .expect("payload deserializes")
}

#[test]
fn test_full_pick_session() {
    let variants = garment_payload();
    let catalog = build_catalog(&variants);

    let names: Vec<&str> = catalog.attributes().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Color", "Size"]);
    assert_eq!(
        catalog.get("Color").unwrap().values,
        vec!["Blue", "Green", "Red"]
    );

    let mut selection = SelectionState::new();
    assert!(!all_selected(&catalog, &selection));

    // First pick narrows the other facet but not its own.
    selection.select("Color", "Blue");
    assert_eq!(
        available_values("Size", &catalog, &variants, &selection),
        vec!["M", "S"]
    );
    assert_eq!(
        available_values("Color", &catalog, &variants, &selection),
        vec!["Blue", "Green", "Red"]
    );

    // Revise the first pick, then complete the selection.
    selection.select("Color", "Red");
    assert_eq!(
        available_values("Size", &catalog, &variants, &selection),
        vec!["M", "S"]
    );
    selection.select("Size", "M");
    assert!(all_selected(&catalog, &selection));

    let outcome = resolve(&variants, &selection);
    let variant = outcome.unique().expect("unique variant");
    assert_eq!(variant.id, "g2");

    // Unique does not imply purchasable; g2 is sold out.
    assert!(!variant.is_in_stock());
}

#[test]
fn test_no_match_is_a_terminal_state_not_an_error() {
    // Only (Red, 40) and (Blue, 42) exist; the cross-product cell
    // (Red, 42) was never created.
    let variants = vec![
        RawVariant::new("v1", "Red - 40"),
        RawVariant::new("v2", "Blue - 42"),
    ];
    let catalog = build_catalog(&variants);

    let mut selection = SelectionState::new();
    selection.select("Color", "Red");
    selection.select("Size", "42");
    assert!(all_selected(&catalog, &selection));
    assert!(matches!(
        resolve(&variants, &selection),
        ResolutionOutcome::NoMatch
    ));
}

#[test]
fn test_empty_catalog_flat_fallback() {
    let variants: Vec<RawVariant> = serde_json::from_str(
        r#"[
            {"id": "k1", "name": "Starter Kit", "metadata": "plain note, not json"},
            {"id": "k2", "name": "Family Pack"}
        ]"#,
    )
    .unwrap();
    for variant in &variants {
        assert!(normalize(variant).is_empty());
    }
    let catalog = build_catalog(&variants);
    assert!(catalog.is_empty());
    // Caller policy from here: present the raw variant list directly.
}

#[test]
fn test_commit_revalidation_catches_concurrent_edit() {
    let mut variants = garment_payload();
    let catalog = build_catalog(&variants);

    let mut selection = SelectionState::new();
    selection.select("Color", "Green");
    selection.select("Size", "M");
    assert!(resolve(&variants, &selection).unique().is_some());

    // Another session edits attributes mid-pick; commit must notice.
    variants[4].attribute_values.insert("Size", "L");
    assert!(matches!(
        catalog.ensure_valid_for(&variants),
        Err(EngineError::StaleCatalog)
    ));

    // A pure stock edit is fine to commit against.
    let mut variants = garment_payload();
    variants[0].stock = Some(40);
    assert!(catalog.ensure_valid_for(&variants).is_ok());
}

#[test]
fn test_policy_threads_through_the_whole_pipeline() {
    // Tenant names variants "Material - Color".
    let policy = NamePolicy {
        positional_labels: ["Material".to_string(), "Color".to_string()],
    };
    let variants = vec![
        RawVariant::new("m1", "Wool - Navy"),
        RawVariant::new("m2", "Linen - Navy"),
        RawVariant::new("m3", "Wool - Sand"),
    ];
    let catalog = build_catalog_with(&variants, &policy);
    assert_eq!(
        catalog.get("Material").unwrap().values,
        vec!["Linen", "Wool"]
    );

    let mut selection = SelectionState::new();
    selection.select("Color", "Navy");
    assert_eq!(
        available_values_with("Material", &catalog, &variants, &selection, &policy),
        vec!["Linen", "Wool"]
    );

    selection.select("Material", "Linen");
    let outcome = resolve_with(&variants, &selection, &policy);
    assert_eq!(outcome.unique().map(|v| v.id.as_str()), Some("m2"));
}

#[test]
fn test_single_axis_product() {
    let variants: Vec<RawVariant> = serde_json::from_str(
        r#"[
            {"id": "s1", "name": "Small", "type": "size"},
            {"id": "s2", "name": "Large", "type": "size"}
        ]"#,
    )
    .unwrap();
    let catalog = build_catalog(&variants);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("Size").unwrap().values, vec!["Large", "Small"]);

    let mut selection = SelectionState::new();
    selection.select("Size", "Large");
    assert!(all_selected(&catalog, &selection));
    assert_eq!(
        resolve(&variants, &selection).unique().map(|v| v.id.as_str()),
        Some("s2")
    );
}
