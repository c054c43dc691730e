use super::lookup::Keyed;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Writes whole-valued decimals as JSON integers (`670`, not `670.0`), the
/// form existing API consumers receive.
pub fn serialize_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Integers beyond 2^53 are not exact in f64; leave those as floats.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    let v = *value;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_EXACT {
        if v >= 0.0 {
            serializer.serialize_u64(v as u64)
        } else {
            serializer.serialize_i64(v as i64)
        }
    } else {
        serializer.serialize_f64(v)
    }
}

/// A product in the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 100,
    "name": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
    "price": 109.95,
    "description": "Your perfect pack for everyday use and walks in the forest.",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
    "discount_percentage": 3.2,
    "weight_in_grams": 670
}))]
pub struct Product {
    pub id: u64,
    /// The product name
    pub name: String,
    /// The product price
    #[serde(serialize_with = "serialize_decimal")]
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL
    pub image: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub discount_percentage: f64,
    #[serde(serialize_with = "serialize_decimal")]
    pub weight_in_grams: f64,
}

impl Keyed for Product {
    type Projection = Product;

    const INVALID_KEY_MESSAGE: &'static str =
        "Invalid product id. Valid product id range is 100 to 110.";

    fn key(&self) -> u64 {
        self.id
    }

    fn project(&self) -> Product {
        self.clone()
    }
}

/// Distance from the warehouse to a delivery postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "postal_code": 465535, "distance_in_kilometers": 200.35 }))]
pub struct WarehouseDistance {
    pub postal_code: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub distance_in_kilometers: f64,
}

impl Keyed for WarehouseDistance {
    /// Only the distance is exposed to callers.
    type Projection = f64;

    const INVALID_KEY_MESSAGE: &'static str =
        "Invalid postal code, valid ones are 465535 to 465545.";

    fn key(&self) -> u64 {
        self.postal_code
    }

    fn project(&self) -> f64 {
        self.distance_in_kilometers
    }
}
