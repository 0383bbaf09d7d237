/*
 * Responsibility
 * - 認証済み本人情報 (GET /me) の response DTO
 */
use serde::Serialize;

use crate::services::auth::Role;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub subject: String,
    pub roles: Vec<Role>,
}
