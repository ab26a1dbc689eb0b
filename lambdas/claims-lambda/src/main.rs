use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use cairn_shared::AppState;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Initialize the Cognito client once at startup
    let config = aws_config::load_from_env().await;
    let state = AppState::new(CognitoClient::new(&config));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
