// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load CA certificate: {0}")]
    CaCertificate(String),

    #[error("Failed to load Kubernetes configuration: {0}")]
    KubeconfigError(String),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Error reading {name} configmap in namespace {namespace}: {source}")]
    ClusterIdentity {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Error reading data from API: {0}")]
    InventoryRead(#[source] reqwest::Error),

    #[error("Error posting to API: {0}")]
    InventoryCreate(#[source] reqwest::Error),

    #[error("Error updating cluster {id} in API: {source}")]
    InventoryUpdate {
        id: i64,
        #[source]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
