pub mod claims;
pub mod identity;
pub mod types;

use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub cognito_client: CognitoClient,
}

impl AppState {
    pub fn new(cognito_client: CognitoClient) -> Arc<Self> {
        Arc::new(Self { cognito_client })
    }
}
