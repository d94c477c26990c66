// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and cluster metadata collection.

pub mod client;
pub mod collector;

pub use client::create_client;
pub use collector::{collect_node_versions, ClusterCollector, NodeVersions};
