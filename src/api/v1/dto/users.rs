/*
 * Responsibility
 * - Users の request/response DTO
 * - 管理系 (block) のクエリパラメータもここに置く
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::user_repo::UserRow;

#[derive(Debug, Deserialize)]
pub struct BlockUserQuery {
    pub blocked: bool,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub blocked: bool,
    pub driver_verified: bool,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            full_name: row.full_name,
            role: row.role,
            blocked: row.blocked,
            driver_verified: row.driver_verified,
        }
    }
}
