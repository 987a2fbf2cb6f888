//! API client for the Ex-Online inspection service.
//!
//! This module provides the `ExOnlineClient` struct, which turns each
//! read operation into one GET request and decodes the envelope it returns.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::envelope::Envelope;
use crate::models::{AttachmentData, EqItem, Project};

use super::{ApiError, DateRange, Endpoint, Page, Transport};

/// API client for Ex-Online.
/// Clone is cheap - the underlying transport shares its connection pool.
#[derive(Debug, Clone)]
pub struct ExOnlineClient {
    transport: Transport,
}

impl ExOnlineClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Create a client from `EXO_KEY` / `EXO_BASE_URL`
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&Config::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Send the request for `endpoint` and decode the full envelope,
    /// without checking `err`.
    pub fn fetch_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Envelope<T>, ApiError> {
        let raw = self.transport.get_json(endpoint.path(), &endpoint.query())?;
        let envelope = Envelope::<T>::from_value(raw)?;
        debug!(
            endpoint = endpoint.path(),
            err = envelope.err,
            records = envelope.data.len(),
            "Decoded envelope"
        );
        Ok(envelope)
    }

    /// Send the request for `endpoint` and return its records, or the
    /// envelope's error when `err` is non-zero.
    pub fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<Vec<T>, ApiError> {
        self.fetch_envelope(endpoint)?.into_data()
    }

    // ===== Data Fetching Methods =====

    /// Fetch documents and associated equipment for dossiers in a project
    pub fn attachment_data(
        &self,
        project_id: i64,
        dossier_ids: &[i64],
        dates: DateRange,
    ) -> Result<Vec<AttachmentData>, ApiError> {
        self.fetch(&Endpoint::ListEqAttc {
            project_id,
            dossier_ids: dossier_ids.to_vec(),
            dates,
        })
    }

    /// Fetch one page of projects for an account
    pub fn projects(&self, account_id: i64, page: Page) -> Result<Vec<Project>, ApiError> {
        self.fetch(&Endpoint::ListProjects { account_id, page })
    }

    /// Fetch detailed equipment properties for dossiers in a project
    pub fn equipment(
        &self,
        project_id: i64,
        dossier_ids: &[i64],
        dates: DateRange,
        page: Page,
    ) -> Result<Vec<EqItem>, ApiError> {
        self.fetch(&Endpoint::ListEq {
            project_id,
            dossier_ids: dossier_ids.to_vec(),
            dates,
            page,
        })
    }
}
