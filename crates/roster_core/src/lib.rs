//! Core domain logic for the company roster.
//! This crate is the single source of truth for record invariants.

pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use form::controller::{FormController, FormError};
pub use form::draft::{CompanyDraft, EducationDraft, EmployeeDraft, SkillDraft};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{designation_labels, skill_labels, Designation, SkillName};
pub use model::company::{decode_companies, encode_companies, Company, Education, Employee, Skill};
pub use model::entry_list::{EntryKey, EntryList};
pub use model::field_path::{
    CompanyField, EducationField, EmployeeField, FieldPath, SkillField, UnknownFieldPath,
};
pub use repo::blob_store::{BlobResult, BlobStore, BlobStoreError, SqliteBlobStore};
pub use service::company_store::{
    CompanyStore, LoadStatus, StoreError, StoreResult, COMPANIES_BLOB_KEY, DELETE_CONFIRM_MESSAGE,
};
pub use service::prompt::{PresetPrompter, Prompter, RecordingPrompter};
pub use service::router::{View, ViewRouter};
pub use service::session::{
    RosterSession, SessionError, SessionResult, SubmitOutcome, SAVED_MESSAGE,
};
pub use validation::{Clock, FieldError, FieldErrors, FixedClock, SystemClock, ValidationError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
