use axum::{Json, Router};
use axum::routing::post;
use tracing::info;
use crate::models::reservation::{ReservationRequest, ReservationResponse};

pub fn router() -> Router {
    Router::new()
        .route("/reserve-inventory", post(reserve_inventory))
}

/// Stand-in for the inventory step of the order workflow: nothing is
/// allocated, every reservation is reported as successful.
pub async fn reserve_inventory(
    Json(body): Json<ReservationRequest>,
) -> Json<ReservationResponse> {
    info!("Request received : {}", body.0);

    Json(ReservationResponse::reserved())
}
