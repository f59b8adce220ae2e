//! Simulated picker session over a mixed-encoding variant list
//!
//! ```sh
//! cargo run -p variant-engine --example picker_demo
//! ```

use variant_engine::{
    RawVariant, ResolutionOutcome, SelectionState, all_selected, available_values, build_catalog,
    resolve,
};

fn main() {
    let variants: Vec<RawVariant> = serde_json::from_str(
        r#"[
            {"id": "v1", "name": "Red - 40", "price": "59.90", "stock": 3},
            {"id": "v2", "name": "Red - 42", "price": "59.90", "stock": 0},
            {"id": "v3", "name": "Color: Blue | Size: 40", "price": 64.9, "stock": 5},
            {"id": "v4", "attributeValues": {"Color": "Blue", "Size": "42"}, "price": 64.9, "stock": 2}
        ]"#,
    )
    .expect("demo payload is valid");

    let catalog = build_catalog(&variants);
    println!("catalog (fingerprint {}):", &catalog.fingerprint()[..12]);
    for descriptor in catalog.attributes() {
        println!("  {}: {:?}", descriptor.name, descriptor.values);
    }

    let mut selection = SelectionState::new();
    for (attribute, value) in [("Color", "Red"), ("Size", "40")] {
        selection.select(attribute, value);
        println!("\npicked {attribute} = {value}");
        for descriptor in catalog.attributes() {
            let open = available_values(&descriptor.name, &catalog, &variants, &selection);
            println!("  {} still open: {:?}", descriptor.name, open);
        }
    }

    assert!(all_selected(&catalog, &selection));
    match resolve(&variants, &selection) {
        ResolutionOutcome::Unique { variant } => {
            println!(
                "\nresolved {} ({}), in stock: {}",
                variant.id,
                variant.name,
                variant.is_in_stock()
            );
        }
        ResolutionOutcome::NoMatch => println!("\nthis combination is unavailable"),
        ResolutionOutcome::Ambiguous { variants } => {
            println!("\ndata-quality anomaly, {} identical variants", variants.len());
        }
    }
}
