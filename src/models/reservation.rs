use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reservation payload forwarded by the order workflow. The shape is not
/// enforced; whatever JSON the caller sends is accepted as-is.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct ReservationRequest(pub Value);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReservationResponse {
    pub success: bool,
}

impl ReservationResponse {
    pub fn reserved() -> Self {
        Self { success: true }
    }
}
