/*
 * Responsibility
 * - bookings テーブル向け SQLx 操作 (管理画面は一覧のみ)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct BookingRow {
    #[sqlx(rename = "bookingId")]
    pub id: Uuid,
    #[sqlx(rename = "rideId")]
    pub ride_id: Uuid,
    #[sqlx(rename = "passengerId")]
    pub passenger_id: Uuid,
    #[sqlx(rename = "seatsBooked")]
    pub seats_booked: i32,
    pub status: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub async fn list(db: &PgPool) -> Result<Vec<BookingRow>, RepoError> {
    let rows = sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT "bookingId", "rideId", "passengerId", "seatsBooked", "status", "createdAt"
        FROM bookings
        ORDER BY "createdAt" DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}
