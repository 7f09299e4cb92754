use shopping_list_server::{init_tracing, run, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load()?;
    run(config).await
}
