/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークン検証ロジックは services/auth 側の責務
 * - リクエスト単位で生成され、リクエスト完了とともに破棄される (永続化しない)
 */

use crate::services::auth::Role;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `subject` はトークンの sub クレーム (メールアドレス)
/// - `roles` は付与済みの権限。attachment stage は空のまま入れる —
///   管理操作の認可はヘッダから再検証するため、ここからは昇格しない
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub subject: String,
    pub roles: Vec<Role>,
}

impl AuthCtx {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            roles: Vec::new(),
        }
    }
}
