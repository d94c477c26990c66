// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the cluster inventory API

use crate::config::Config;
use crate::constants::inventory::CLUSTERS_PATH;
use crate::error::{Result, TrackerError};
use crate::types::{ClusterInfo, ClusterRecord};
use reqwest::{Certificate, Client, StatusCode};
use std::path::Path;
use tracing::{debug, instrument};
use url::Url;

pub struct InventoryClient {
    http: Client,
    base_url: String,
}

impl InventoryClient {
    /// Create a client for `config.api_endpoint` that trusts the CA bundle at
    /// `config.ca_cert_path`
    pub fn new(config: &Config) -> Result<Self> {
        let pem = read_ca_bundle(&config.ca_cert_path)?;
        Self::with_ca_certificate(&pem, config.api_endpoint.clone())
    }

    /// Create a client whose TLS verification trusts only the given PEM CA,
    /// never the built-in public roots
    pub fn with_ca_certificate(pem: &[u8], base_url: Url) -> Result<Self> {
        let cert = Certificate::from_pem(pem)
            .map_err(|e| TrackerError::CaCertificate(format!("invalid PEM: {}", e)))?;
        let http = Client::builder()
            .tls_built_in_root_certs(false)
            .add_root_certificate(cert)
            .build()
            .map_err(|e| TrackerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_http_client(http, base_url))
    }

    /// Create a client around an already configured `reqwest::Client`
    pub fn with_http_client(http: Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn clusters_url(&self) -> String {
        format!("{}/{}", self.base_url, CLUSTERS_PATH)
    }

    fn cluster_url(&self, id: i64) -> String {
        format!("{}/{}", self.clusters_url(), id)
    }

    /// Fetch every cluster record known to the inventory
    #[instrument(skip(self))]
    pub async fn list_clusters(&self) -> Result<Vec<ClusterRecord>> {
        let response = self
            .http
            .get(self.clusters_url())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(TrackerError::InventoryRead)?;

        let records: Vec<ClusterRecord> =
            response.json().await.map_err(TrackerError::InventoryRead)?;
        debug!("Inventory returned {} clusters", records.len());
        Ok(records)
    }

    /// Create a new cluster record
    #[instrument(skip(self, info), fields(cluster = %info.cluster_name))]
    pub async fn create_cluster(&self, info: &ClusterInfo) -> Result<StatusCode> {
        let response = self
            .http
            .post(self.clusters_url())
            .json(info)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(TrackerError::InventoryCreate)?;

        Ok(response.status())
    }

    /// Overwrite the cluster record `id`
    #[instrument(skip(self, info), fields(cluster = %info.cluster_name))]
    pub async fn update_cluster(&self, id: i64, info: &ClusterInfo) -> Result<StatusCode> {
        let response = self
            .http
            .put(self.cluster_url(id))
            .json(info)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| TrackerError::InventoryUpdate { id, source: e })?;

        Ok(response.status())
    }
}

fn read_ca_bundle(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| TrackerError::CaCertificate(format!("{}: {}", path.display(), e)))
}
