use authed_requests::{AuthScheme, ContentType, use_post};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("authed_requests=debug".parse()?),
        )
        .init();

    let post = use_post()?;
    let response = post
        .post(
            "https://httpbin.org/post",
            json!({ "title": "hello", "done": false }),
            Some(ContentType::Json),
            Some(AuthScheme::ApiKey),
            Some("TEST_TOKEN"),
        )
        .await?;

    println!("{}", response.status());
    println!("{}", response.text().await?);
    Ok(())
}
