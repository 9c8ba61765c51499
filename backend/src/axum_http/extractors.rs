use axum::extract::{
    FromRequest, FromRequestParts,
    rejection::{JsonRejection, PathRejection, QueryRejection},
};

use super::error_responses::AppError;

/// `axum::Json` whose rejection renders as an `ErrorResponse`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

// Every malformed input is a 400, whatever status axum would pick.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
        response::Response,
        routing::{get, post},
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Cart {
        quantity: i32,
    }

    #[derive(Deserialize)]
    struct Filter {
        with_details: Option<bool>,
    }

    async fn submit(AppJson(cart): AppJson<Cart>) -> String {
        cart.quantity.to_string()
    }

    async fn show(AppPath(id): AppPath<i32>) -> String {
        id.to_string()
    }

    async fn list(AppQuery(filter): AppQuery<Filter>) -> String {
        filter.with_details.unwrap_or(false).to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/carts", post(submit))
            .route("/orders", get(list))
            .route("/orders/:id", get(show))
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn well_formed_input_reaches_the_handler() {
        let response = app()
            .oneshot(
                Request::post("/carts")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"quantity":2}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"2");
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_structured_bad_request() {
        let response = app()
            .oneshot(
                Request::post("/carts")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"quantity":"two"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["code"], 400);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_is_a_structured_bad_request() {
        let response = app()
            .oneshot(
                Request::post("/carts")
                    .body(Body::from(r#"{"quantity":2}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], 400);
    }

    #[tokio::test]
    async fn non_numeric_path_id_is_a_structured_bad_request() {
        let response = app()
            .oneshot(Request::get("/orders/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["code"], 400);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn invalid_query_is_a_structured_bad_request() {
        let response = app()
            .oneshot(
                Request::get("/orders?with_details=maybe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], 400);
    }
}
