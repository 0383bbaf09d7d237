/*
 * Responsibility
 * - rides テーブル向け SQLx 操作 (管理画面は一覧のみ)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct RideRow {
    #[sqlx(rename = "rideId")]
    pub id: Uuid,
    #[sqlx(rename = "driverId")]
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    #[sqlx(rename = "departureTime")]
    pub departure_time: DateTime<Utc>,
    #[sqlx(rename = "seatsAvailable")]
    pub seats_available: i32,
    #[sqlx(rename = "pricePerSeat")]
    pub price_per_seat: f64,
    pub status: String,
}

pub async fn list(db: &PgPool) -> Result<Vec<RideRow>, RepoError> {
    let rows = sqlx::query_as::<_, RideRow>(
        r#"
        SELECT "rideId", "driverId", "origin", "destination", "departureTime",
               "seatsAvailable", "pricePerSeat", "status"
        FROM rides
        ORDER BY "departureTime" DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}
