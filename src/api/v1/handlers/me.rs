/*
 * Responsibility
 * - GET /me: attachment stage が付与した principal をそのまま返す
 * - 未認証 (AuthCtx なし) は extractor が 401 で弾く
 */
use axum::Json;

use crate::api::v1::dto::me::MeResponse;
use crate::api::v1::extractors::AuthCtxExtractor;

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        subject: ctx.subject,
        roles: ctx.roles,
    })
}
