use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use serde_json::{json, Value};

/// Fallback for unmatched routes, `{"success": false, "error": ...}` with a 404.
pub async fn page_not_found_handler(
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": format!("No route for {} {}", method, uri.path()),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn names_the_missing_route() {
        let (status, Json(body)) = page_not_found_handler(
            Method::POST,
            Uri::from_static("/reserve-stock?qty=2"),
        ).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "No route for POST /reserve-stock");
    }
}
