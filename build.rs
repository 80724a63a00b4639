use std::collections::HashSet;
use std::path::Path;

/// Pair values a two-letter genotype can encode to
const VALID_PAIRS: [u64; 10] = [2, 3, 4, 5, 6, 8, 9, 10, 12, 16];

/// Group tags the library knows how to display
const KNOWN_GROUPS: [&str; 3] = [
    "medical_conditions",
    "medicine_interactions",
    "personal_characteristics",
];

/// Strand orientations a marker may declare; omitting it means forward
const KNOWN_ORIENTATIONS: [&str; 2] = ["forward", "reverse"];

fn main() {
    let catalog_path = Path::new("catalogs/snp_markers.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let markers = catalog.get("markers").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'markers' field\n\
             The catalog must have a top-level 'markers' array.\n"
        );
    });

    let markers = markers.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'markers' must be an array\n\
             Got: {markers}\n"
        );
    });

    let total_outcomes = validate_markers(markers);

    println!(
        "cargo:warning=Validated catalog: {} markers, {total_outcomes} total outcomes",
        markers.len()
    );
}

fn validate_markers(markers: &[serde_json::Value]) -> usize {
    let mut seen_ids = HashSet::new();
    let mut total_outcomes = 0;

    for (i, marker) in markers.iter().enumerate() {
        let marker_id = marker
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_marker_fields(marker, marker_id, i);

        assert!(
            seen_ids.insert(marker_id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate marker id '{marker_id}' (index {i})\n"
        );

        total_outcomes += validate_marker_outcomes(marker, marker_id);
    }

    total_outcomes
}

fn validate_marker_fields(marker: &serde_json::Value, marker_id: &str, index: usize) {
    assert!(
        marker.get("id").is_some(),
        "\n\nCATALOG BUILD ERROR: Marker at index {index} missing 'id' field\n"
    );
    assert!(
        marker.get("description").is_some(),
        "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' (index {index}) missing 'description' field\n"
    );
    assert!(
        marker.get("outcomes").is_some(),
        "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' (index {index}) missing 'outcomes' field\n"
    );

    let group = marker.get("group").and_then(|v| v.as_str()).unwrap_or("");
    assert!(
        KNOWN_GROUPS.contains(&group),
        "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' (index {index}) has unknown group '{group}'\n\
         Expected one of: {}\n",
        KNOWN_GROUPS.join(", ")
    );

    if let Some(orientation) = marker.get("orientation") {
        let value = orientation.as_str().unwrap_or("");
        assert!(
            KNOWN_ORIENTATIONS.contains(&value),
            "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' (index {index}) has unknown orientation {orientation}\n\
             Expected one of: {}\n",
            KNOWN_ORIENTATIONS.join(", ")
        );
    }
}

fn validate_marker_outcomes(marker: &serde_json::Value, marker_id: &str) -> usize {
    let Some(outcomes) = marker.get("outcomes").and_then(|o| o.as_array()) else {
        return 0;
    };

    let mut seen_pairs = HashSet::new();
    for (j, outcome) in outcomes.iter().enumerate() {
        let pair = outcome.get("pair").and_then(serde_json::Value::as_u64);
        assert!(
            pair.is_some(),
            "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' outcome {j} missing numeric 'pair' field\n"
        );
        let pair = pair.unwrap_or_default();

        assert!(
            VALID_PAIRS.contains(&pair),
            "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' outcome {j} has pair {pair}\n\
             Pairs must encode a two-letter genotype: {VALID_PAIRS:?}\n"
        );
        assert!(
            seen_pairs.insert(pair),
            "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' lists pair {pair} more than once\n"
        );
        assert!(
            outcome.get("outcome").and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Marker '{marker_id}' outcome {j} missing 'outcome' text\n"
        );
    }

    outcomes.len()
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed=catalogs/snp_markers.json");
    println!("cargo:rerun-if-changed=build.rs");
}
