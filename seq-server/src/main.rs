use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seq_server::config::Args;
use seq_server::reset;
use seq_server::routes::routes;
use seq_server::store::SeqStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let store = SeqStore::open(&args.biz_file)
        .await
        .with_context(|| format!("read biz configuration {}", args.biz_file.display()))?;
    let store = Arc::new(store);

    tokio::spawn(reset::run(store.clone()));

    info!("seq http is listening, addr = {}", args.addr);
    warp::serve(routes(store, args.static_dir)).run(args.addr).await;
    Ok(())
}
