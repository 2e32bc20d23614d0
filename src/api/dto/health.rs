/*
 * Responsibility
 * - GET /health のレスポンス DTO
 * - status は常に存在し、デフォルトは "OK"
 */
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    #[serde(default = "default_status")]
    #[schema(default = "OK", example = "OK")]
    pub status: String,
}

fn default_status() -> String {
    STATUS_OK.to_string()
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self {
            status: default_status(),
        }
    }
}
