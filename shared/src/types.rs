use serde::{Deserialize, Serialize};

// Request body for granting the admin claim
#[derive(Debug, Default, Deserialize)]
pub struct SetAdminClaimRequest {
    #[serde(default)]
    pub email: Option<String>,
}

// Returned to the caller once the claim write has gone through
#[derive(Debug, Serialize)]
pub struct SetAdminClaimResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
