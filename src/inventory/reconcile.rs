// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creates or overwrites the inventory record for the current cluster.

use crate::error::Result;
use crate::inventory::client::InventoryClient;
use crate::types::{find_cluster_id, ClusterInfo};
use tracing::{info, instrument};

/// What a successful reconciliation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No record matched; a new one was created
    Created { status: u16 },
    /// The record with this id was overwritten
    Updated { id: i64 },
}

/// Make the inventory hold `cluster_info`. The first record with the same
/// cluster name is overwritten; without one a new record is created.
#[instrument(skip(inventory, cluster_info), fields(cluster = %cluster_info.cluster_name))]
pub async fn reconcile(
    inventory: &InventoryClient,
    cluster_info: &ClusterInfo,
) -> Result<ReconcileOutcome> {
    let records = inventory.list_clusters().await?;

    match find_cluster_id(&records, &cluster_info.cluster_name) {
        None => {
            info!("Cluster not found in inventory, creating new entry");
            let status = inventory.create_cluster(cluster_info).await?;
            info!("Cluster added to inventory: {:?}", cluster_info);
            info!("Successfully sent data to API: {}", status);
            Ok(ReconcileOutcome::Created {
                status: status.as_u16(),
            })
        }
        Some(id) => {
            info!("Cluster exists in inventory with id: {}", id);
            inventory.update_cluster(id, cluster_info).await?;
            info!("Successfully updated cluster id: {} in inventory", id);
            info!("Successfully sent data: {:?}", cluster_info);
            Ok(ReconcileOutcome::Updated { id })
        }
    }
}
