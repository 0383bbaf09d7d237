/*
 * Responsibility
 * - /admin 系 handler (ユーザー一覧/ブロック/ドライバー承認、ride/booking/payment 一覧)
 * - 各 handler の先頭で is_admin ガード → 失敗は 403、repo には一切触れない
 *
 * Notes
 * - ガードは attachment stage の principal ではなく Authorization ヘッダを
 *   毎回再検証する。検証結果をリクエストを跨いで持ち回らないため。
 * - block/verify は check-then-update の間に他リクエストが割り込み得る
 *   (last write wins)。楽観ロックが必要になったら repo 側で対応する。
 */
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use uuid::Uuid;

use crate::api::v1::dto::{
    bookings::BookingResponse,
    payments::PaymentResponse,
    rides::RideResponse,
    users::{BlockUserQuery, UserResponse},
};
use crate::error::AppError;
use crate::repos::{booking_repo, payment_repo, ride_repo, user_repo};
use crate::services::auth::{AuthService, bearer_token};
use crate::state::AppState;

/// The admin gate. Re-reads the raw `Authorization` header and requires a
/// valid token whose role claim is exactly the admin role.
///
/// Fails closed: missing/malformed header, failed verification, and a
/// missing or non-admin role all collapse to `false`.
fn is_admin(auth: &AuthService, headers: &HeaderMap) -> bool {
    let Some(token) = bearer_token(headers) else {
        return false;
    };

    match auth.verify(token) {
        Ok(claims) => claims.is_admin(),
        Err(_) => false,
    }
}

pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    if !is_admin(&state.auth, &headers) {
        return Err(AppError::Forbidden);
    }

    let rows = user_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

pub async fn block_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<BlockUserQuery>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, AppError> {
    if !is_admin(&state.auth, &headers) {
        return Err(AppError::Forbidden);
    }

    let row = user_repo::set_blocked(&state.db, user_id, query.blocked)
        .await?
        .ok_or(AppError::not_found("User"))?;

    Ok(Json(UserResponse::from(row)))
}

pub async fn verify_driver(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, AppError> {
    if !is_admin(&state.auth, &headers) {
        return Err(AppError::Forbidden);
    }

    let row = user_repo::set_driver_verified(&state.db, user_id)
        .await?
        .ok_or(AppError::not_found("User"))?;

    Ok(Json(UserResponse::from(row)))
}

pub async fn list_rides(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RideResponse>>, AppError> {
    if !is_admin(&state.auth, &headers) {
        return Err(AppError::Forbidden);
    }

    let rows = ride_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(RideResponse::from).collect()))
}

pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    if !is_admin(&state.auth, &headers) {
        return Err(AppError::Forbidden);
    }

    let rows = booking_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(BookingResponse::from).collect()))
}

pub async fn list_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PaymentResponse>>, AppError> {
    if !is_admin(&state.auth, &headers) {
        return Err(AppError::Forbidden);
    }

    let rows = payment_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(PaymentResponse::from).collect()))
}
