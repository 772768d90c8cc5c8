use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    Ok(container_ps::start().await?)
}
