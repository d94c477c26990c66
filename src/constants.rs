// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env {
    /// Base URL of the inventory API (required)
    pub const API_ENDPOINT: &str = "API_ENDPOINT";
    /// PEM file trusted for TLS towards the inventory API
    pub const CA_CERT_PATH: &str = "CA_CERT_PATH";
    pub const CONFIGMAP_NAME: &str = "CONFIGMAP_NAME";
    pub const CONFIGMAP_NAMESPACE: &str = "CONFIGMAP_NAMESPACE";
    /// Kubeconfig context used when not running in-cluster
    pub const KUBE_CONTEXT: &str = "KUBE_CONTEXT";
}

/// Cluster identity config-map
pub mod identity {
    pub const CONFIGMAP_NAME: &str = "cluster-identity";
    pub const CONFIGMAP_NAMESPACE: &str = "kube-system";
    /// Data key holding the human-assigned cluster name
    pub const CLUSTER_NAME_KEY: &str = "cluster-name";
    /// Reported when the config-map has no cluster name
    pub const UNKNOWN_CLUSTER_NAME: &str = "unknown";
}

/// Inventory API
pub mod inventory {
    pub const CLUSTERS_PATH: &str = "api/clusters";
    pub const DEFAULT_CA_CERT_PATH: &str = "ca.crt";
}
