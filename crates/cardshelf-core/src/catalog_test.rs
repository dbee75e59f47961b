use super::*;

#[test]
fn default_config_passes_validation() {
    assert!(validate_catalog(&CatalogConfig::default()).is_ok());
}

#[test]
fn default_page_size_is_grid_sized() {
    let config = CatalogConfig::default();
    assert_eq!(config.default_page_size, 9);
    assert_eq!(config.featured_count, 6);
}

#[test]
fn validate_rejects_zero_page_size() {
    let config = CatalogConfig {
        default_page_size: 0,
        ..CatalogConfig::default()
    };
    let err = validate_catalog(&config).unwrap_err();
    assert!(err.to_string().contains("default_page_size"));
}

#[test]
fn validate_rejects_zero_featured_count() {
    let config = CatalogConfig {
        featured_count: 0,
        ..CatalogConfig::default()
    };
    let err = validate_catalog(&config).unwrap_err();
    assert!(err.to_string().contains("featured_count"));
}

#[test]
fn validate_rejects_blank_priority_name() {
    let config = CatalogConfig {
        priority_categories: vec!["  ".to_string()],
        ..CatalogConfig::default()
    };
    let err = validate_catalog(&config).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_duplicate_priority_case_insensitive() {
    let config = CatalogConfig {
        priority_categories: vec!["Pokemon".to_string(), "POKEMON".to_string()],
        ..CatalogConfig::default()
    };
    let err = validate_catalog(&config).unwrap_err();
    assert!(err.to_string().contains("duplicate priority category"));
}

#[test]
fn validate_rejects_blank_alias_column() {
    let config = CatalogConfig {
        column_aliases: vec![ColumnAlias {
            column: " ".to_string(),
            field: CanonicalField::MarketPrice,
        }],
        ..CatalogConfig::default()
    };
    let err = validate_catalog(&config).unwrap_err();
    assert!(err.to_string().contains("column alias"));
}

#[test]
fn alias_table_user_entries_come_first() {
    let config = CatalogConfig {
        column_aliases: vec![ColumnAlias {
            column: "Fair Value".to_string(),
            field: CanonicalField::MarketPrice,
        }],
        ..CatalogConfig::default()
    };
    let table = config.alias_table();
    let first = table
        .candidates(CanonicalField::MarketPrice)
        .next()
        .expect("expected at least one candidate");
    assert_eq!(first, "fair value");
}

#[test]
fn alias_table_contains_builtin_spellings() {
    let table = CatalogConfig::default().alias_table();
    let market: Vec<&str> = table.candidates(CanonicalField::MarketPrice).collect();
    assert!(market.contains(&"market price"));
    assert!(market.contains(&"market_raw"));
    let condition: Vec<&str> = table.candidates(CanonicalField::Condition).collect();
    assert!(condition.contains(&"psa grade"));
    assert!(condition.contains(&"cardgrade"));
}

#[test]
fn duplicate_column_across_fields_is_not_an_error() {
    // First match wins at normalization time; the table itself accepts it.
    let config = CatalogConfig {
        column_aliases: vec![
            ColumnAlias {
                column: "price".to_string(),
                field: CanonicalField::ListPrice,
            },
            ColumnAlias {
                column: "price".to_string(),
                field: CanonicalField::MarketPrice,
            },
        ],
        ..CatalogConfig::default()
    };
    assert!(validate_catalog(&config).is_ok());
}

#[test]
fn parses_yaml_with_defaults() {
    let yaml = "priority_categories:\n  - Pokemon\n  - One Piece\n";
    let config: CatalogConfig = serde_yaml::from_str(yaml).expect("yaml should parse");
    assert_eq!(config.priority_categories.len(), 2);
    assert_eq!(config.default_page_size, 9);
    assert!(config.column_aliases.is_empty());
}

#[test]
fn parses_yaml_alias_entries() {
    let yaml = "column_aliases:\n  - column: fair value\n    field: market_price\n";
    let config: CatalogConfig = serde_yaml::from_str(yaml).expect("yaml should parse");
    assert_eq!(config.column_aliases.len(), 1);
    assert_eq!(
        config.column_aliases[0].field,
        CanonicalField::MarketPrice
    );
}

#[test]
fn load_catalog_config_from_real_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("catalog.yaml");
    assert!(
        path.exists(),
        "catalog.yaml missing at {path:?}, required for this test"
    );
    let result = load_catalog_config(&path);
    assert!(result.is_ok(), "failed to load catalog.yaml: {result:?}");
    let config = result.unwrap();
    assert!(!config.priority_categories.is_empty());
}

#[test]
fn canonical_field_display() {
    assert_eq!(CanonicalField::MarketPrice.to_string(), "market_price");
    assert_eq!(CanonicalField::CollectionSet.to_string(), "collection_set");
}

