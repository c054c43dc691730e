pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::catalog::{
    coerce_key, lookup, lookup_by_key, Catalog, CatalogError, Keyed, LookupError, LookupResult,
    Product, WarehouseDistance,
};
pub use transport::http::{build_app, create_router, AppState};
