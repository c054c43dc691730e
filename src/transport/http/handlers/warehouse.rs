use crate::domain::catalog::lookup;
use crate::transport::http::handlers::common::{dataset_unavailable, json_200, json_400};
use crate::transport::http::types::{
    AppState, DistanceQuery, DistanceResponse, POSTAL_CODE_NOT_AVAILABLE,
};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;

#[utoipa::path(
    get,
    path = "/warehouse/distance",
    tag = "Warehouse",
    params(DistanceQuery),
    responses(
        (status = 200, description = "Distance in KM", body = DistanceResponse),
        (status = 400, description = "Invalid postal code, valid ones are 465535 to 465545.", body = DistanceResponse)
    )
)]
pub async fn get_distance_handler(
    State(state): State<AppState>,
    query: Result<Query<DistanceQuery>, QueryRejection>,
) -> Response {
    let postal_codes = state.catalog.postal_codes();
    if postal_codes.is_empty() {
        tracing::warn!("distance lookup requested but the postal code dataset is empty");
        return dataset_unavailable(POSTAL_CODE_NOT_AVAILABLE);
    }

    // A missing or unparsable query string falls through to the 400 below.
    let postal_code = query
        .ok()
        .and_then(|Query(q)| q.postal_code)
        .unwrap_or_default();

    match lookup(postal_codes, &postal_code) {
        Ok(distance_in_kilometers) => json_200(DistanceResponse::Success {
            distance_in_kilometers,
        }),
        Err(err) => {
            tracing::debug!(postal_code = %postal_code, "no warehouse distance for postal code");
            json_400(&err, |message| DistanceResponse::Error { message })
        }
    }
}
