use lambda_http::{http::StatusCode, Body, Response};
use serde_json::json;
use thiserror::Error;

use crate::identity::IdentityStore;
use crate::types::{ErrorResponse, SetAdminClaimRequest, SetAdminClaimResponse};

/// Failure modes of the admin-claim operation. The kind strings are what
/// callers see in the error envelope.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Internal(String),
}

impl ClaimError {
    pub fn kind(&self) -> &'static str {
        match self {
            ClaimError::InvalidArgument(_) => "invalid-argument",
            ClaimError::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ClaimError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ClaimError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Grant the admin claim to the account registered under `request.email`.
///
/// Resolves the email to a user via the identity store, then overwrites the
/// account's custom claims with `{"admin": true}`. Identity-store failures at
/// either step are passed through verbatim as `ClaimError::Internal`.
pub async fn set_admin_claim<I: IdentityStore>(
    identity: &I,
    request: &SetAdminClaimRequest,
) -> Result<SetAdminClaimResponse, ClaimError> {
    let email = match request.email.as_deref() {
        Some(email) if !email.is_empty() => email,
        _ => return Err(ClaimError::InvalidArgument("Email required".to_string())),
    };

    let user = identity
        .find_user_by_email(email)
        .await
        .map_err(ClaimError::Internal)?;

    identity
        .set_custom_claims(&user.user_id, json!({ "admin": true }))
        .await
        .map_err(ClaimError::Internal)?;

    Ok(SetAdminClaimResponse {
        success: true,
        message: format!("Admin claim set for {}", email),
    })
}

/// Handle POST /claims/admin
pub async fn handle_set_admin_claim<I: IdentityStore>(
    identity: &I,
    body: &Body,
) -> Result<Response<Body>, lambda_http::Error> {
    let body_str = match body {
        Body::Text(text) => text,
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or(""),
        Body::Empty => "",
    };

    tracing::info!("Admin claim request received");

    let request: SetAdminClaimRequest = if body_str.is_empty() {
        SetAdminClaimRequest::default()
    } else {
        match serde_json::from_str(body_str) {
            Ok(req) => req,
            Err(e) => {
                tracing::error!("Failed to parse request body: {}", e);
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "invalid-argument",
                    &format!("Invalid request body: {}", e),
                );
            }
        }
    };

    match set_admin_claim(identity, &request).await {
        Ok(result) => {
            tracing::info!("{}", result.message);
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .header("Access-Control-Allow-Origin", "*")
                .body(serde_json::to_string(&result)?.into())
                .map_err(Box::new)?)
        }
        Err(e) => {
            tracing::error!("Admin claim request failed: {}", e);
            error_response(e.status(), e.kind(), &e.to_string())
        }
    }
}

fn error_response(
    status: StatusCode,
    kind: &str,
    message: &str,
) -> Result<Response<Body>, lambda_http::Error> {
    let error = ErrorResponse {
        error: kind.to_string(),
        message: message.to_string(),
    };
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(&error)?.into())
        .map_err(Box::new)?)
}
