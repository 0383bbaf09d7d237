/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - PgPool を受け取り参照/管理フラグ更新を提供
 * - DB エラーは RepoError/AppError に変換しやすい形で返す
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    pub email: String,
    #[sqlx(rename = "fullName")]
    pub full_name: String,
    pub role: String,
    #[sqlx(rename = "isBlocked")]
    pub blocked: bool,
    #[sqlx(rename = "isDriverVerified")]
    pub driver_verified: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub async fn list(db: &PgPool) -> Result<Vec<UserRow>, RepoError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "email", "fullName", "role", "isBlocked", "isDriverVerified", "createdAt"
        FROM users
        ORDER BY "createdAt" DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "email", "fullName", "role", "isBlocked", "isDriverVerified", "createdAt"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Set the blocked flag. `None` means the user does not exist.
pub async fn set_blocked(
    db: &PgPool,
    user_id: Uuid,
    blocked: bool,
) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET "isBlocked" = $2
        WHERE "userId" = $1
        RETURNING "userId", "email", "fullName", "role", "isBlocked", "isDriverVerified", "createdAt"
        "#,
    )
    .bind(user_id)
    .bind(blocked)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Mark the user as a verified driver. `None` means the user does not exist.
pub async fn set_driver_verified(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET "isDriverVerified" = true
        WHERE "userId" = $1
        RETURNING "userId", "email", "fullName", "role", "isBlocked", "isDriverVerified", "createdAt"
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
