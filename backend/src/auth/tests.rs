use super::*;
use argon2::{PasswordHasher, password_hash::SaltString};
use axum::{
    body::to_bytes,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use jsonwebtoken::{EncodingKey, Header, encode};

const SECRET: &str = "supersecretjwtsecretforunittesting123";

fn hash(password: &str) -> String {
    let salt = SaltString::from_b64("c29tZXNhbHR2YWx1ZQ").unwrap();
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

fn parts_with(authorization: Option<&str>, secret: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/v1/menus");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    if let Some(secret) = secret {
        builder = builder.extension(JwtSecret(secret.to_string()));
    }
    builder.body(()).unwrap().into_parts().0
}

#[test]
fn issued_token_validates_with_same_secret() {
    let token = issue_token(SECRET, 7, "admin", 24).unwrap();

    let claims = validate_token(&token, SECRET).expect("Valid token should pass");
    assert_eq!(claims.sub, "7");
    assert_eq!(claims.username, "admin");
}

#[test]
fn expired_token_is_rejected() {
    let claims = Claims {
        sub: "7".to_string(),
        username: "admin".to_string(),
        exp: 1,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert!(validate_token(&token, SECRET).is_err());
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let token = issue_token("wrongsecret", 7, "admin", 24).unwrap();

    assert!(validate_token(&token, SECRET).is_err());
}

#[test]
fn password_verification_uses_argon2_hash() {
    let stored = hash("pasta123");

    assert!(verify_password("pasta123", &stored));
    assert!(!verify_password("pasta124", &stored));
    assert!(!verify_password("pasta123", "not-a-phc-string"));
}

#[tokio::test]
async fn extractor_accepts_bearer_token() {
    let token = issue_token(SECRET, 3, "cashier", 1).unwrap();
    let mut parts = parts_with(Some(&format!("Bearer {token}")), Some(SECRET));

    let user = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();

    assert_eq!(user.user_id, 3);
    assert_eq!(user.username, "cashier");
}

fn unauthorized_message(err: AppError) -> String {
    match err {
        AppError::Unauthorized(message) => message,
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn extractor_rejects_missing_or_malformed_header() {
    let mut missing = parts_with(None, Some(SECRET));
    let err = AuthUser::from_request_parts(&mut missing, &())
        .await
        .unwrap_err();
    assert_eq!(unauthorized_message(err), "Missing Authorization header");

    let mut basic = parts_with(Some("Basic abc"), Some(SECRET));
    let err = AuthUser::from_request_parts(&mut basic, &())
        .await
        .unwrap_err();
    assert_eq!(unauthorized_message(err), "Invalid Authorization header format");
}

#[tokio::test]
async fn extractor_rejects_token_signed_with_other_secret() {
    let token = issue_token("wrongsecret", 3, "cashier", 1).unwrap();
    let mut parts = parts_with(Some(&format!("Bearer {token}")), Some(SECRET));

    let err = AuthUser::from_request_parts(&mut parts, &())
        .await
        .unwrap_err();

    assert!(unauthorized_message(err).starts_with("JWT validation failed"));
}

#[tokio::test]
async fn rejection_renders_as_error_response() {
    let mut missing = parts_with(None, Some(SECRET));
    let response = AuthUser::from_request_parts(&mut missing, &())
        .await
        .unwrap_err()
        .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"code": 401, "message": "Missing Authorization header"})
    );
}

#[tokio::test]
async fn missing_secret_extension_is_a_server_error() {
    let token = issue_token(SECRET, 3, "cashier", 1).unwrap();
    let mut parts = parts_with(Some(&format!("Bearer {token}")), None);

    let response = AuthUser::from_request_parts(&mut parts, &())
        .await
        .unwrap_err()
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
