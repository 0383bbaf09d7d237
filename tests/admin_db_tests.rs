//! Database-backed admin scenarios.
//!
//! These need a live Postgres reachable via DATABASE_URL and are therefore
//! ignored by default:
//!
//!   DATABASE_URL=postgres://... cargo test -- --ignored

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use rideshare_api::repos::user_repo;

mod common;
use common::{admin_token, test_app_with_db};

async fn db() -> sqlx::PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for --ignored tests");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    sqlx::migrate!().run(&pool).await.expect("run migrations");
    pool
}

async fn insert_user(pool: &sqlx::PgPool) -> Uuid {
    // Unique email so repeated runs don't collide.
    let email = format!("rider-{}@example.com", Uuid::new_v4());
    sqlx::query_scalar(
        r#"
        INSERT INTO users ("email", "fullName")
        VALUES ($1, 'Test Rider')
        RETURNING "userId"
        "#,
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("insert user")
}

fn admin_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::AUTHORIZATION, format!("Bearer {}", admin_token()))
        .body(Body::empty())
        .expect("build request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
#[ignore = "requires a Postgres database reachable via DATABASE_URL"]
async fn test_block_user_persists_flag() {
    let pool = db().await;
    let user_id = insert_user(&pool).await;

    let response = test_app_with_db(pool.clone())
        .await
        .oneshot(admin_request(
            Method::POST,
            &format!("/api/v1/admin/users/{user_id}/block?blocked=true"),
        ))
        .await
        .expect("oneshot");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user_id.to_string());
    assert_eq!(json["blocked"], true);

    let row = user_repo::get(&pool, user_id)
        .await
        .expect("query user")
        .expect("user exists");
    assert!(row.blocked);

    // And unblocking flips it back.
    let response = test_app_with_db(pool.clone())
        .await
        .oneshot(admin_request(
            Method::POST,
            &format!("/api/v1/admin/users/{user_id}/block?blocked=false"),
        ))
        .await
        .expect("oneshot");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["blocked"], false);
}

#[tokio::test]
#[ignore = "requires a Postgres database reachable via DATABASE_URL"]
async fn test_verify_driver_persists_flag() {
    let pool = db().await;
    let user_id = insert_user(&pool).await;

    let response = test_app_with_db(pool.clone())
        .await
        .oneshot(admin_request(
            Method::POST,
            &format!("/api/v1/admin/users/{user_id}/verify-driver"),
        ))
        .await
        .expect("oneshot");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["driver_verified"], true);

    let row = user_repo::get(&pool, user_id)
        .await
        .expect("query user")
        .expect("user exists");
    assert!(row.driver_verified);
}

#[tokio::test]
#[ignore = "requires a Postgres database reachable via DATABASE_URL"]
async fn test_block_unknown_user_is_not_found() {
    let pool = db().await;

    let response = test_app_with_db(pool)
        .await
        .oneshot(admin_request(
            Method::POST,
            &format!("/api/v1/admin/users/{}/block?blocked=true", Uuid::new_v4()),
        ))
        .await
        .expect("oneshot");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"]["message"],
        "User not found"
    );
}

#[tokio::test]
#[ignore = "requires a Postgres database reachable via DATABASE_URL"]
async fn test_list_users_returns_full_collection() {
    let pool = db().await;
    let user_id = insert_user(&pool).await;

    let response = test_app_with_db(pool)
        .await
        .oneshot(admin_request(Method::GET, "/api/v1/admin/users"))
        .await
        .expect("oneshot");

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json.as_array().expect("array body");
    assert!(
        users
            .iter()
            .any(|u| u["id"] == user_id.to_string()),
        "inserted user should appear in the unfiltered collection"
    );
}

#[tokio::test]
#[ignore = "requires a Postgres database reachable via DATABASE_URL"]
async fn test_collection_endpoints_respond() {
    let pool = db().await;

    for uri in [
        "/api/v1/admin/rides",
        "/api/v1/admin/bookings",
        "/api/v1/admin/payments",
    ] {
        let response = test_app_with_db(pool.clone())
            .await
            .oneshot(admin_request(Method::GET, uri))
            .await
            .expect("oneshot");

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(body_json(response).await.is_array(), "{uri}");
    }
}
