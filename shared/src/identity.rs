use aws_sdk_cognitoidentityprovider::error::DisplayErrorContext;
use aws_sdk_cognitoidentityprovider::types::AttributeType;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;

/// A user account resolved from the identity provider.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: String,
}

/// Lookup and claim-mutation operations on the identity provider.
///
/// Handlers take an `IdentityStore` rather than the Cognito client directly
/// so tests can substitute a stub store.
pub trait IdentityStore {
    async fn find_user_by_email(&self, email: &str) -> Result<UserIdentity, String>;
    async fn set_custom_claims(
        &self,
        user_id: &str,
        claims: serde_json::Value,
    ) -> Result<(), String>;
}

/// Production identity store backed by a Cognito user pool.
///
/// Custom claims live in the `custom:claims` attribute as a single JSON
/// document, so every write replaces the whole claims payload.
pub struct CognitoIdentityStore<'a> {
    client: &'a CognitoClient,
    user_pool_id: String,
}

impl<'a> CognitoIdentityStore<'a> {
    pub fn new(client: &'a CognitoClient, user_pool_id: impl Into<String>) -> Self {
        Self {
            client,
            user_pool_id: user_pool_id.into(),
        }
    }
}

impl IdentityStore for CognitoIdentityStore<'_> {
    async fn find_user_by_email(&self, email: &str) -> Result<UserIdentity, String> {
        let result = self
            .client
            .list_users()
            .user_pool_id(&self.user_pool_id)
            .filter(format!("email = \"{}\"", email))
            .limit(1)
            .send()
            .await
            .map_err(|e| DisplayErrorContext(e).to_string())?;

        let user = result
            .users()
            .first()
            .ok_or_else(|| format!("No user found for email {}", email))?;

        let username = user
            .username()
            .ok_or_else(|| format!("User record for {} has no username", email))?;

        Ok(UserIdentity {
            user_id: username.to_string(),
            email: email.to_string(),
        })
    }

    async fn set_custom_claims(
        &self,
        user_id: &str,
        claims: serde_json::Value,
    ) -> Result<(), String> {
        let attribute = AttributeType::builder()
            .name("custom:claims")
            .value(claims.to_string())
            .build()
            .map_err(|e| e.to_string())?;

        self.client
            .admin_update_user_attributes()
            .user_pool_id(&self.user_pool_id)
            .username(user_id)
            .user_attributes(attribute)
            .send()
            .await
            .map_err(|e| DisplayErrorContext(e).to_string())?;

        Ok(())
    }
}
