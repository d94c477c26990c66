// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cluster_tracker::config::Config;
use cluster_tracker::inventory::{InventoryClient, ReconcileOutcome};
use cluster_tracker::kubernetes::create_client;
use cluster_tracker::tracker::track;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(outcome) => {
            info!("Cluster tracking finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ReconcileOutcome> {
    // Configuration errors surface before any network call
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: api_endpoint={}, identity={}/{}",
        config.api_endpoint, config.identity.namespace, config.identity.name
    );
    let inventory = InventoryClient::new(&config)?;

    let client = create_client(config.kube_context.as_deref()).await?;
    info!("Connected to Kubernetes cluster");

    Ok(track(client, config.identity.clone(), &inventory).await?)
}
