// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum_server::{tls_rustls::RustlsConfig, Handle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use relational_backend_wallet::{
    api::router,
    blockchain::{ChainRegistry, ContractCache, EvmGateway, KeyStore},
    config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER},
    state::AppState,
    storage::QueueDatabase,
    transfer::TransferEngine,
};

/// In-flight requests get this long to finish after Ctrl-C.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

async fn shutdown_on_ctrl_c(handle: Handle<SocketAddr>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, draining connections");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("Invalid configuration");
    init_tracing(config.log_format);

    // Install the ring crypto provider for rustls (must be done before any TLS operations)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Chain registry with RPC overrides applied
    let mut chains = ChainRegistry::builtin();
    for (chain, url) in &config.rpc_overrides {
        chains
            .set_rpc_url(chain, url.clone())
            .expect("CHAIN_RPC_URLS names an unknown chain");
    }
    let chains = Arc::new(chains);

    let queue = QueueDatabase::open(&config.queue_db_path()).expect("Failed to open queue database");
    tracing::info!(path = %config.queue_db_path().display(), "Queue database opened");

    let keys = Arc::new(KeyStore::load_dir(&config.wallet_keys_dir).expect("Failed to load wallet keys"));
    tracing::info!(count = keys.len(), "Backend wallet keys loaded");

    let gateway = Arc::new(
        EvmGateway::from_registry(
            &chains,
            ContractCache::new(config.contract_cache_capacity, config.contract_cache_ttl),
        )
        .expect("Failed to create RPC clients"),
    );

    let engine = TransferEngine::new(
        chains.clone(),
        keys.clone(),
        gateway.clone(),
        gateway,
        Arc::new(queue.clone()),
    );

    let app = router(AppState::new(chains, keys, queue, engine));

    let handle: Handle<SocketAddr> = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    let addr = config.bind_addr;
    match &config.tls {
        Some(tls) => {
            let tls_config = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                .await
                .expect("Failed to load TLS certificate");
            tracing::info!(%addr, "Backend wallet server listening on https (docs at /docs)");
            axum_server::bind_rustls(addr, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .expect("HTTPS server failed");
        }
        None => {
            tracing::info!(%addr, "Backend wallet server listening on http (docs at /docs)");
            axum_server::bind(addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .expect("HTTP server failed");
        }
    }

    tracing::info!("Server stopped");
}
