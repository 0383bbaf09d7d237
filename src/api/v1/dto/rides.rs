/*
 * Responsibility
 * - Rides の response DTO
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::repos::ride_repo::RideRow;

#[derive(Debug, Serialize)]
pub struct RideResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub seats_available: i32,
    pub price_per_seat: f64,
    pub status: String,
}

impl From<RideRow> for RideResponse {
    fn from(row: RideRow) -> Self {
        Self {
            id: row.id,
            driver_id: row.driver_id,
            origin: row.origin,
            destination: row.destination,
            departure_time: row.departure_time,
            seats_available: row.seats_available,
            price_per_seat: row.price_per_seat,
            status: row.status,
        }
    }
}
