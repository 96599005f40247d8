use anyhow::Result;
use carbnb::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
