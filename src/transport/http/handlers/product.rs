use crate::domain::catalog::lookup;
use crate::transport::http::handlers::common::{dataset_unavailable, json_200, json_400};
use crate::transport::http::types::{AppState, ProductResponse, PRODUCT_NOT_AVAILABLE};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product info", body = ProductResponse),
        (status = 400, description = "Invalid product id. Valid product id range is 100 to 110.", body = ProductResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    let products = state.catalog.products();
    if products.is_empty() {
        tracing::warn!("product lookup requested but the product dataset is empty");
        return dataset_unavailable(PRODUCT_NOT_AVAILABLE);
    }

    // An undecodable segment is treated like any other unknown id.
    let raw_id = id.map(|Path(id)| id).unwrap_or_default();

    match lookup(products, &raw_id) {
        Ok(product) => json_200(ProductResponse::Success { product }),
        Err(err) => {
            tracing::debug!(id = %raw_id, "no product with this id");
            json_400(&err, |message| ProductResponse::Error { message })
        }
    }
}
