/*
 * Responsibility
 * - Bookings の response DTO
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::repos::booking_repo::BookingRow;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub passenger_id: Uuid,
    pub seats_booked: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for BookingResponse {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            ride_id: row.ride_id,
            passenger_id: row.passenger_id,
            seats_booked: row.seats_booked,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
