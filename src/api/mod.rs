/*
 * Responsibility
 * - HTTP API の公開ポイント (routes() の re-export など)
 */
pub mod docs;
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
