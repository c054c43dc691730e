//! Static lookup datasets: products and warehouse delivery distances.

pub mod dataset;
pub mod lookup;
pub mod records;

pub use dataset::{Catalog, CatalogError};
pub use lookup::{coerce_key, lookup, lookup_by_key, Keyed, LookupError, LookupResult};
pub use records::{Product, WarehouseDistance};
