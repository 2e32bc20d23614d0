/*
 * Responsibility
 * - モジュール構成の定義
 * - integration test から build_router() / Config を使えるように公開
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;

pub use app::build_router;
pub use config::Config;
