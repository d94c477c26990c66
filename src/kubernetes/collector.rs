// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reads cluster identity, API server version and node versions.

use crate::config::IdentityConfig;
use crate::constants::identity::{CLUSTER_NAME_KEY, UNKNOWN_CLUSTER_NAME};
use crate::error::{Result, TrackerError};
use crate::types::ClusterInfo;
use k8s_openapi::api::core::v1::{ConfigMap, Node};
use kube::{api::ListParams, Api, Client, ResourceExt};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Distinct versions reported across a set of nodes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeVersions {
    pub kubelet_versions: BTreeSet<String>,
    pub kernel_versions: BTreeSet<String>,
}

/// Collect the distinct kubelet and kernel versions of `nodes`.
/// Nodes without `status.nodeInfo` are skipped.
pub fn collect_node_versions(nodes: &[Node]) -> NodeVersions {
    let mut versions = NodeVersions::default();

    for node in nodes {
        let Some(node_info) = node.status.as_ref().and_then(|s| s.node_info.as_ref()) else {
            debug!("Node {} does not report node info, skipping", node.name_any());
            continue;
        };
        versions
            .kubelet_versions
            .insert(node_info.kubelet_version.clone());
        versions
            .kernel_versions
            .insert(node_info.kernel_version.clone());
    }

    versions
}

pub struct ClusterCollector {
    client: Client,
    identity: IdentityConfig,
}

impl ClusterCollector {
    pub fn new(client: Client, identity: IdentityConfig) -> Self {
        Self { client, identity }
    }

    /// Gather everything reported to the inventory API
    #[instrument(skip(self))]
    pub async fn collect(&self) -> Result<ClusterInfo> {
        let version = self.client.apiserver_version().await?;
        debug!("API server version: {}", version.git_version);

        let nodes: Api<Node> = Api::all(self.client.clone());
        let node_list = nodes.list(&ListParams::default()).await?;
        let node_versions = collect_node_versions(&node_list.items);
        info!(
            "Found {} nodes ({} kubelet versions, {} kernel versions)",
            node_list.items.len(),
            node_versions.kubelet_versions.len(),
            node_versions.kernel_versions.len()
        );

        let cluster_name = self.read_cluster_name().await?;

        Ok(ClusterInfo {
            cluster_name,
            api_server_version: version.git_version,
            kubelet_versions: node_versions.kubelet_versions,
            kernel_versions: node_versions.kernel_versions,
        })
    }

    /// Read the cluster name from the identity config-map, falling back to
    /// "unknown" when the key is absent
    #[instrument(skip(self), fields(configmap = %format!("{}/{}", self.identity.namespace, self.identity.name)))]
    pub async fn read_cluster_name(&self) -> Result<String> {
        let config_maps: Api<ConfigMap> =
            Api::namespaced(self.client.clone(), &self.identity.namespace);

        let config_map = config_maps.get(&self.identity.name).await.map_err(|e| {
            TrackerError::ClusterIdentity {
                namespace: self.identity.namespace.clone(),
                name: self.identity.name.clone(),
                source: e,
            }
        })?;

        let cluster_name = config_map
            .data
            .as_ref()
            .and_then(|d| d.get(CLUSTER_NAME_KEY))
            .cloned()
            .unwrap_or_else(|| {
                info!(
                    "Config-map has no '{}' key, using '{}'",
                    CLUSTER_NAME_KEY, UNKNOWN_CLUSTER_NAME
                );
                UNKNOWN_CLUSTER_NAME.to_string()
            });

        info!("Cluster name: {}", cluster_name);
        Ok(cluster_name)
    }
}
