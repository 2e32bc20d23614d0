/*
 * Responsibility
 * - GET / (挨拶) と GET /teste (CI/CD 疎通確認用)
 * - 状態を持たない固定レスポンス
 */
use axum::Json;

use crate::api::dto::message::MessageResponse;

pub const GREETING: &str = "Hello World";
pub const CI_CD_MESSAGE: &str = "Teste CI-CD";

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting message", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(GREETING))
}

/// CI/CD smoke test
#[utoipa::path(
    get,
    path = "/teste",
    responses(
        (status = 200, description = "Fixed message used by the deploy pipeline", body = MessageResponse)
    )
)]
pub async fn teste() -> Json<MessageResponse> {
    Json(MessageResponse::new(CI_CD_MESSAGE))
}
