//! Process-wide company list with write-through persistence.
//!
//! # Responsibility
//! - Own the ordered list of saved companies.
//! - Mirror every mutation to the blob store immediately.
//!
//! # Invariants
//! - Companies are addressed by position; newest first.
//! - Every successful mutation is followed by one full-list write.
//! - An unreadable blob at load degrades to an empty list, never a failure.

use crate::model::company::{decode_companies, encode_companies, Company};
use crate::repo::blob_store::{BlobStore, BlobStoreError};
use crate::service::prompt::Prompter;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Blob key holding the whole company list.
pub const COMPANIES_BLOB_KEY: &str = "companies_v2";
/// Question shown before a company is deleted.
pub const DELETE_CONFIRM_MESSAGE: &str = "Delete this company?";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Index does not address a stored company.
    IndexOutOfRange { index: usize, len: usize },
    /// Persisted blob is not a valid company list.
    StorageParseFailure(serde_json::Error),
    /// Company list could not be encoded.
    Serialize(serde_json::Error),
    Blob(BlobStoreError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "company index {index} out of range (len {len})")
            }
            Self::StorageParseFailure(err) => write!(f, "stored company list is invalid: {err}"),
            Self::Serialize(err) => write!(f, "failed to encode company list: {err}"),
            Self::Blob(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IndexOutOfRange { .. } => None,
            Self::StorageParseFailure(err) | Self::Serialize(err) => Some(err),
            Self::Blob(err) => Some(err),
        }
    }
}

impl From<BlobStoreError> for StoreError {
    fn from(value: BlobStoreError) -> Self {
        Self::Blob(value)
    }
}

/// How the startup load went.
#[derive(Debug)]
pub enum LoadStatus {
    /// No blob stored yet.
    Missing,
    Loaded { count: usize },
    /// Blob unreadable or unparsable; the store started empty.
    Degraded(StoreError),
}

impl LoadStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

/// Ordered company list backed by a blob store.
pub struct CompanyStore<B: BlobStore> {
    blob_store: B,
    companies: Vec<Company>,
    load_status: LoadStatus,
}

impl<B: BlobStore> CompanyStore<B> {
    /// Loads the company list from `blob_store`.
    ///
    /// Never fails: missing or broken data yields an empty store and is
    /// reported through `load_status()`.
    pub fn load(blob_store: B) -> Self {
        let (companies, load_status) = match blob_store.read_blob(COMPANIES_BLOB_KEY) {
            Ok(None) => (Vec::new(), LoadStatus::Missing),
            Ok(Some(blob)) => match decode_companies(&blob) {
                Ok(companies) => {
                    let count = companies.len();
                    (companies, LoadStatus::Loaded { count })
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=degraded error_code=storage_parse_failure blob_bytes={} error={}",
                        blob.len(),
                        err
                    );
                    (
                        Vec::new(),
                        LoadStatus::Degraded(StoreError::StorageParseFailure(err)),
                    )
                }
            },
            Err(err) => {
                error!(
                    "event=store_load module=store status=degraded error_code=blob_read_failed error={err}"
                );
                (Vec::new(), LoadStatus::Degraded(err.into()))
            }
        };

        if !load_status.is_degraded() {
            info!(
                "event=store_load module=store status=ok companies={}",
                companies.len()
            );
        }
        Self {
            blob_store,
            companies,
            load_status,
        }
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Read-only view, newest first.
    pub fn list(&self) -> &[Company] {
        &self.companies
    }

    pub fn get(&self, index: usize) -> Option<&Company> {
        self.companies.get(index)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn blob_store(&self) -> &B {
        &self.blob_store
    }

    /// Inserts `company` at the front and persists the list.
    ///
    /// # Errors
    /// - Persistence errors; the in-memory insert is kept.
    pub fn create(&mut self, company: Company) -> StoreResult<()> {
        self.companies.insert(0, company);
        info!(
            "event=company_create module=store status=ok companies={}",
            self.companies.len()
        );
        self.persist()
    }

    /// Replaces the company at `index` and persists the list.
    ///
    /// # Errors
    /// - `IndexOutOfRange` without any change.
    /// - Persistence errors; the in-memory replacement is kept.
    pub fn update(&mut self, index: usize, company: Company) -> StoreResult<()> {
        let slot = self.slot_mut(index, "company_update")?;
        *slot = company;
        info!("event=company_update module=store status=ok index={index}");
        self.persist()
    }

    /// Removes the company at `index` after the user confirms.
    ///
    /// Returns `Ok(false)` when the user declines; nothing changes then.
    ///
    /// # Errors
    /// - `IndexOutOfRange`, checked before prompting.
    /// - Persistence errors; the in-memory removal is kept.
    pub fn delete(&mut self, index: usize, prompter: &dyn Prompter) -> StoreResult<bool> {
        self.slot_mut(index, "company_delete")?;
        if !prompter.confirm(DELETE_CONFIRM_MESSAGE) {
            info!("event=company_delete module=store status=declined index={index}");
            return Ok(false);
        }

        self.companies.remove(index);
        info!(
            "event=company_delete module=store status=ok index={index} companies={}",
            self.companies.len()
        );
        self.persist()?;
        Ok(true)
    }

    fn slot_mut(&mut self, index: usize, event: &str) -> StoreResult<&mut Company> {
        let len = self.companies.len();
        self.companies.get_mut(index).ok_or_else(|| {
            warn!(
                "event={event} module=store status=error error_code=index_out_of_range index={index} len={len}"
            );
            StoreError::IndexOutOfRange { index, len }
        })
    }

    fn persist(&self) -> StoreResult<()> {
        let blob = encode_companies(&self.companies).map_err(StoreError::Serialize)?;
        match self.blob_store.write_blob(COMPANIES_BLOB_KEY, &blob) {
            Ok(()) => Ok(()),
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error error_code=blob_write_failed blob_bytes={} error={}",
                    blob.len(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
