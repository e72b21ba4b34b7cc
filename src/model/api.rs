use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub message: String,
}
