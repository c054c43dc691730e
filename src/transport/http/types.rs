use crate::domain::catalog::records::serialize_decimal;
use crate::domain::catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Body of `GET /product/{id}`, tagged by `status`.
#[derive(Serialize, Debug, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProductResponse {
    Success { product: Product },
    Error { message: String },
}

/// Body of `GET /warehouse/distance`, tagged by `status`.
#[derive(Serialize, Debug, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DistanceResponse {
    Success {
        #[serde(serialize_with = "serialize_decimal")]
        distance_in_kilometers: f64,
    },
    Error { message: String },
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DistanceQuery {
    /// Delivery address postal code
    #[param(value_type = Option<u64>)]
    pub postal_code: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of records in the product dataset.
    pub products: usize,
    /// Number of records in the postal code dataset.
    pub postal_codes: usize,
}

// Plain-text bodies returned with 200 when a dataset has no records at all.
pub const PRODUCT_NOT_AVAILABLE: &str = "Product not available";
pub const POSTAL_CODE_NOT_AVAILABLE: &str = "Invalid Postal Code";
