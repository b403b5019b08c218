use authed_requests::{AuthScheme, use_get};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("authed_requests=debug".parse()?),
        )
        .init();

    let get = use_get()?;
    let response = get
        .get(
            "https://httpbin.org/bearer",
            Some(AuthScheme::BearerToken),
            Some("TEST_TOKEN"),
        )
        .await?;

    println!("{}", response.status());
    println!("{}", response.text().await?);
    Ok(())
}
