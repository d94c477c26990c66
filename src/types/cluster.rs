// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of a cluster as reported to the inventory API
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    pub cluster_name: String,
    pub api_server_version: String,
    pub kubelet_versions: BTreeSet<String>,
    pub kernel_versions: BTreeSet<String>,
}

/// A cluster entry as returned by the inventory API.
/// Fields other than the id and name are ignored.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRecord {
    pub id: i64,
    pub cluster_name: String,
}

/// Id of the first record named `cluster_name`, if any
pub fn find_cluster_id(records: &[ClusterRecord], cluster_name: &str) -> Option<i64> {
    records
        .iter()
        .find(|r| r.cluster_name == cluster_name)
        .map(|r| r.id)
}
