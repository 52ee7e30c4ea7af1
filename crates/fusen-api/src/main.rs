mod config;
mod http;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use config::ServerConfig;
use fusen_core::app::ItemService;
use fusen_core::impls::InMemoryItemStore;
use http::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // (A) 設定の読み込みとロガー初期化
    let config = ServerConfig::parse();
    logging::init_logger(config.verbose);

    tracing::info!("starting fusen-api");
    if config.verbose {
        tracing::debug!("server config: {:?}", config);
    }

    // (B) ストアを1つだけ構築し、サービス経由で注入（ambient global は持たない）
    let store = Arc::new(InMemoryItemStore::new());
    let service = Arc::new(ItemService::new(store));
    let state = AppState::new(service);

    // (C) HTTP サーバ起動（ctrl-c で graceful shutdown）
    http::start_server(&config, state)
        .await
        .context("http server failed")?;

    Ok(())
}
