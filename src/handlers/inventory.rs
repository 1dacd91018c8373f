use axum::{extract::Path, http::StatusCode};
use tracing::debug;

/// Accepts inventory updates without applying them; products carry no
/// quantity yet.
pub async fn update_inventory(Path((id, quantity)): Path<(String, String)>) -> StatusCode {
    debug!(%id, %quantity, "Ignoring inventory update");
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::{build_router, AppState};

    #[tokio::test]
    async fn inventory_update_is_a_no_op() {
        let state = AppState::seeded();
        let app = build_router(state.clone());

        let resp = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/inventory/update/1/25")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
        assert_eq!(
            state.products.read().await.all(),
            crate::seed::sample_products().as_slice()
        );
    }
}
