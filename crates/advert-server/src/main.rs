use advert_server::{Result, config::ServerConfig, run::run};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = ServerConfig::load()?;
    info!("Starting advert server on {}:{}", args.listen_address, args.port);
    run(args).await
}
