// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Data exchanged with the inventory API.

pub mod cluster;

pub use cluster::{find_cluster_id, ClusterInfo, ClusterRecord};
