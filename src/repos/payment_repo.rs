/*
 * Responsibility
 * - payments テーブル向け SQLx 操作 (管理画面は一覧のみ)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct PaymentRow {
    #[sqlx(rename = "paymentId")]
    pub id: Uuid,
    #[sqlx(rename = "bookingId")]
    pub booking_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub async fn list(db: &PgPool) -> Result<Vec<PaymentRow>, RepoError> {
    let rows = sqlx::query_as::<_, PaymentRow>(
        r#"
        SELECT "paymentId", "bookingId", "amount", "currency", "status", "createdAt"
        FROM payments
        ORDER BY "createdAt" DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}
