// Responsibility
// - v1 の URL 構造を定義
// - /health, /me, /admin/* を route
// - /admin 系は handler 先頭の is_admin ガードで認可する (route_layer ではなく)
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    admin::{block_user, list_bookings, list_payments, list_rides, list_users, verify_driver},
    health::health,
    me::me,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
        .route("/admin/users", get(list_users))
        .route("/admin/users/{user_id}/block", post(block_user))
        .route("/admin/users/{user_id}/verify-driver", post(verify_driver))
        .route("/admin/rides", get(list_rides))
        .route("/admin/bookings", get(list_bookings))
        .route("/admin/payments", get(list_payments))
}
