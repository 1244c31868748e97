//! Application state shared by all request handlers.
//!
//! Built once in `main` and injected through axum's `State` extractor; there
//! is no process-global store handle.

use std::{sync::Arc, time::Duration};

use medicare_core::storage::PatientRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// Cloned for each request; clones share the same repository.
#[derive(Clone)]
pub struct AppState {
    /// Patient repository backing both `/patients` routes.
    pub patient_repo: Arc<dyn PatientRepository>,
    /// Per-request timeout applied by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates state around an existing repository.
    pub fn new(patient_repo: Arc<dyn PatientRepository>, request_timeout: Duration) -> Self {
        Self {
            patient_repo,
            request_timeout,
        }
    }

    /// Connects to the configured store, running the schema check.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo = SqliteRepository::connect(&config.database_url).await?;

        Ok(Self::new(Arc::new(repo), config.request_timeout()))
    }

    /// State backed by a fresh in-memory store.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let repo = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory store should open");

        Self::new(Arc::new(repo), Duration::from_secs(10))
    }
}
