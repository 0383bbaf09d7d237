//! Test utilities and common setup.

use std::sync::Arc;

use axum::Router;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use sqlx::postgres::PgPoolOptions;

use rideshare_api::app::build_router;
use rideshare_api::config::{AppEnv, Config};
use rideshare_api::services::auth::AuthService;
use rideshare_api::state::AppState;

pub const SECRET: &str = "integration-test-secret-0123456789-ok";
pub const ISSUER: &str = "https://auth.test";
pub const AUDIENCE: &str = "rideshare-api";

pub fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().expect("test addr"),
        database_url: "postgres://unused".to_string(),
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
        auth_issuer: ISSUER.to_string(),
        auth_audience: AUDIENCE.to_string(),
        access_token_leeway_seconds: 0,
        access_jwt_secret: SECRET.to_string(),
    }
}

/// Router over a lazy pool that never connects.
///
/// Any handler that touches storage through this pool fails with a 500, so
/// asserting a 403/401 also asserts that zero storage I/O happened.
pub fn test_app() -> Router {
    let db = PgPoolOptions::new()
        .connect_lazy("postgres://nobody@127.0.0.1:1/unreachable")
        .expect("lazy pool");

    let auth = Arc::new(AuthService::new(SECRET, ISSUER, AUDIENCE, 0));
    build_router(AppState::new(db, auth), &test_config())
}

/// Router over a live database (for the `#[ignore]` scenarios).
pub async fn test_app_with_db(db: sqlx::PgPool) -> Router {
    let auth = Arc::new(AuthService::new(SECRET, ISSUER, AUDIENCE, 0));
    build_router(AppState::new(db, auth), &test_config())
}

/// Mint a token signed with the test secret.
pub fn mint_token(sub: &str, role: Option<&str>, exp_offset_secs: i64) -> String {
    let claims = serde_json::json!({
        "iss": ISSUER,
        "aud": AUDIENCE,
        "sub": sub,
        "exp": (chrono::Utc::now().timestamp() + exp_offset_secs) as u64,
        "role": role,
    });
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode test token")
}

pub fn admin_token() -> String {
    mint_token("admin@example.com", Some("admin"), 600)
}

pub fn user_token() -> String {
    mint_token("rider@example.com", Some("user"), 600)
}
