// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, identity, inventory};
use crate::error::{Result, TrackerError};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Job configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the inventory API
    pub api_endpoint: Url,
    /// CA bundle trusted for inventory API calls
    pub ca_cert_path: PathBuf,
    pub identity: IdentityConfig,
    /// Kubeconfig context for the out-of-cluster fallback
    pub kube_context: Option<String>,
}

/// Location of the config-map holding the cluster name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub name: String,
    pub namespace: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: identity::CONFIGMAP_NAME.to_string(),
            namespace: identity::CONFIGMAP_NAMESPACE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = get(vars::API_ENDPOINT)
            .ok_or_else(|| TrackerError::Config("No API_ENDPOINT specified.".to_string()))?;
        let api_endpoint = Url::parse(endpoint.trim()).map_err(|e| {
            TrackerError::Config(format!("Invalid API_ENDPOINT '{}': {}", endpoint, e))
        })?;

        let ca_cert_path = get(vars::CA_CERT_PATH)
            .unwrap_or_else(|| inventory::DEFAULT_CA_CERT_PATH.to_string())
            .into();

        let defaults = IdentityConfig::default();
        let identity = IdentityConfig {
            name: get(vars::CONFIGMAP_NAME).unwrap_or(defaults.name),
            namespace: get(vars::CONFIGMAP_NAMESPACE).unwrap_or(defaults.namespace),
        };

        Ok(Config {
            api_endpoint,
            ca_cert_path,
            identity,
            kube_context: get(vars::KUBE_CONTEXT),
        })
    }
}
