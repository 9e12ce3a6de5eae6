use wireline::config::Config;
use wireline::greeting::Greeting;
use wireline::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.logging.max_level()?)
        .init();

    tokio::select! {
        res = server::run(&cfg, Greeting) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
