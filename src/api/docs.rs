/*
 * Responsibility
 * - OpenAPI ドキュメント (utoipa) の定義
 * - GET /openapi.json (生 JSON) と GET /docs (Scalar UI) で公開
 * - どちらも Config::docs_enabled で切り替え
 */
use axum::{Json, Router, routing::get};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api::dto::{health::HealthCheck, message::MessageResponse};

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const DOCS_UI_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::root::root,
        crate::api::handlers::root::teste,
        crate::api::handlers::health::health,
    ),
    components(schemas(MessageResponse, HealthCheck)),
    tags((name = "healthcheck"))
)]
pub struct ApiDoc;

pub fn routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .merge(Scalar::with_url(DOCS_UI_PATH, ApiDoc::openapi()))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
