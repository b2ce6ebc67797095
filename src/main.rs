use clap::Parser;

use tinyserve::config::Config;
use tinyserve::server::listener::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut cfg = Config::parse();
    cfg.canonicalize_docroot()?;

    let server = Server::bind(&cfg)?;
    tracing::info!("HTTP server started on http://{}", server.local_addr()?);
    tracing::info!("Document root: {}", cfg.docroot.display());

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
