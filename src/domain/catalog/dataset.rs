//! The read-only datasets served by the API.
//!
//! A `Catalog` is built once at startup, either from the JSON compiled into the
//! binary or from a file named in configuration, and then shared behind an
//! `Arc` for the lifetime of the process.

use super::lookup::Keyed;
use super::records::{Product, WarehouseDistance};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate key {key} in {dataset} dataset")]
    DuplicateKey { dataset: &'static str, key: u64 },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    postal_codes: Vec<WarehouseDistance>,
}

impl Catalog {
    pub fn new(
        products: Vec<Product>,
        postal_codes: Vec<WarehouseDistance>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            products,
            postal_codes,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The datasets shipped with the binary (`data/catalog.json`).
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn postal_codes(&self) -> &[WarehouseDistance] {
        &self.postal_codes
    }

    fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("product", &self.products)?;
        ensure_unique("postal code", &self.postal_codes)
    }
}

fn ensure_unique<R: Keyed>(dataset: &'static str, records: &[R]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.key()) {
            return Err(CatalogError::DuplicateKey {
                dataset,
                key: record.key(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_covers_documented_ranges() {
        let catalog = Catalog::embedded().unwrap();

        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (100..=110).collect::<Vec<_>>());

        let codes: Vec<u64> = catalog
            .postal_codes()
            .iter()
            .map(|d| d.postal_code)
            .collect();
        assert_eq!(codes, (465535..=465545).collect::<Vec<_>>());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json(r#"{ "products": [] }"#).unwrap();
        assert!(catalog.products().is_empty());
        assert!(catalog.postal_codes().is_empty());
    }

    #[test]
    fn duplicate_postal_codes_are_rejected() {
        let raw = r#"{
            "postal_codes": [
                { "postal_code": 465535, "distance_in_kilometers": 1.0 },
                { "postal_code": 465535, "distance_in_kilometers": 2.0 }
            ]
        }"#;
        match Catalog::from_json(raw) {
            Err(CatalogError::DuplicateKey { dataset, key }) => {
                assert_eq!(dataset, "postal code");
                assert_eq!(key, 465535);
            }
            other => panic!("expected duplicate key error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let product = Product {
            id: 104,
            name: "Mens Casual Slim Fit".to_string(),
            price: 15.99,
            description: String::new(),
            category: "men's clothing".to_string(),
            image: String::new(),
            discount_percentage: 0.0,
            weight_in_grams: 210.0,
        };
        let err = Catalog::new(vec![product.clone(), product], Vec::new()).unwrap_err();
        match err {
            CatalogError::DuplicateKey { dataset, key } => {
                assert_eq!(dataset, "product");
                assert_eq!(key, 104);
            }
            other => panic!("expected duplicate key error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = Catalog::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
