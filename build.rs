use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/restriction_enzymes.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the sample enzyme catalog before building.\n",
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
    let entries = catalog.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Root must be a JSON array of enzyme entries\n\
             Got: {catalog}\n"
        );
    });

    for (i, entry) in entries.iter().enumerate() {
        validate_entry_fields(entry, i);
    }

    println!(
        "cargo:warning=Validated enzyme catalog: {} entries",
        entries.len()
    );
}

// Missing or mistyped attributes are skipped at run time, so only the shape is checked here
fn validate_entry_fields(entry: &serde_json::Value, index: usize) {
    assert!(
        entry.is_object(),
        "\n\nCATALOG BUILD ERROR: Entry at index {index} is not an object\n\
         Got: {entry}\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the sample catalog changes
    println!("cargo:rerun-if-changed=catalogs/restriction_enzymes.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
