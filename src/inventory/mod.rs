// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Inventory API access and record reconciliation.

pub mod client;
pub mod reconcile;

pub use client::InventoryClient;
pub use reconcile::{reconcile, ReconcileOutcome};
