// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::error::{Result, TrackerError};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, info, instrument};

/// Create a Kubernetes client, preferring in-cluster credentials and falling
/// back to the local kubeconfig (optionally a named context).
#[instrument]
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = match KConfig::incluster() {
        Ok(c) => {
            info!("Using in-cluster configuration");
            c
        }
        Err(e) => {
            debug!("In-cluster configuration unavailable: {}", e);
            let c = load_kubeconfig(context).await?;
            info!("Using local configuration");
            c
        }
    };

    Client::try_from(config)
        .map_err(|e| TrackerError::KubeconfigError(format!("Failed to create client: {}", e)))
}

async fn load_kubeconfig(context: Option<&str>) -> Result<KConfig> {
    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    KConfig::from_kubeconfig(&options).await.map_err(|e| {
        TrackerError::KubeconfigError(format!(
            "No in-cluster credentials and failed to load kubeconfig: {}",
            e
        ))
    })
}
