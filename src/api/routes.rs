/*
 * Responsibility
 * - URL 構造を定義 (/, /teste, /health)
 * - 未登録パス / メソッド違いは axum のデフォルト (404 / 405) に任せる
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    health::health,
    root::{root, teste},
};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/teste", get(teste))
        .route("/health", get(health))
}
