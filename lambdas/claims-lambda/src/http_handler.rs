use cairn_shared::claims;
use cairn_shared::identity::CognitoIdentityStore;
use cairn_shared::AppState;
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use std::env;
use std::sync::Arc;

/// Main Lambda handler - routes requests to the claims endpoint
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("Claims Lambda invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        return Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST,OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type,Authorization")
            .body(Body::Empty)
            .map_err(Box::new)?);
    }

    if path == "/claims/admin" {
        return match method {
            &Method::POST => {
                let user_pool_id =
                    env::var("COGNITO_USER_POOL_ID").expect("COGNITO_USER_POOL_ID must be set");
                let store = CognitoIdentityStore::new(&state.cognito_client, user_pool_id);
                claims::handle_set_admin_claim(&store, body).await
            }
            _ => method_not_allowed(),
        };
    }

    tracing::warn!("No route matched - Method: {} Path: {}", method, path);
    not_found()
}

fn method_not_allowed() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(
            serde_json::json!({"error": "Method not allowed"})
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}

fn not_found() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::json!({"error": "Not found"}).to_string().into())
        .map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cognitoidentityprovider::config::BehaviorVersion;
    use aws_sdk_cognitoidentityprovider::{Client as CognitoClient, Config};

    // The client is never sent a request in these tests, so a bare config is
    // enough to construct the state.
    fn test_state() -> Arc<AppState> {
        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .build();
        AppState::new(CognitoClient::from_conf(config))
    }

    fn test_request(method: &str, path: &str) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri(path)
            .body(Body::Empty)
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_returns_ok() {
        let response = function_handler(test_request("OPTIONS", "/claims/admin"), test_state())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let response = function_handler(test_request("POST", "/claims/other"), test_state())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let response = function_handler(test_request("GET", "/claims/admin"), test_state())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
