// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One tracking pass: collect from the cluster, then reconcile the inventory.

use crate::config::IdentityConfig;
use crate::error::Result;
use crate::inventory::{reconcile, InventoryClient, ReconcileOutcome};
use crate::kubernetes::ClusterCollector;
use kube::Client;
use tracing::instrument;

/// Collect the cluster's metadata and push it to the inventory. The
/// inventory is not contacted unless collection succeeded.
#[instrument(skip_all)]
pub async fn track(
    client: Client,
    identity: IdentityConfig,
    inventory: &InventoryClient,
) -> Result<ReconcileOutcome> {
    let cluster_info = ClusterCollector::new(client, identity).collect().await?;
    reconcile(inventory, &cluster_info).await
}
