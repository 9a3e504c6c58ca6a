//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the roster session (list, form, submit, delete) to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` and a message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide session; calls are serialized by its mutex.
//! - Negative indices never address an entry.

use roster_core::db::open_db;
use roster_core::{
    core_version as core_version_inner, designation_labels, init_logging as init_logging_inner,
    ping as ping_inner, skill_labels, FieldPath, PresetPrompter, RecordingPrompter, RosterSession,
    SessionError, SqliteBlobStore, View,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const ROSTER_DB_FILE_NAME: &str = "roster.sqlite3";
static ROSTER_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: OnceLock<Mutex<Option<RosterSession<SqliteBlobStore>>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Skill labels for the skill dropdown, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn skill_catalog() -> Vec<String> {
    skill_labels().into_iter().map(str::to_owned).collect()
}

/// Designation labels for the designation dropdown, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn designation_catalog() -> Vec<String> {
    designation_labels().into_iter().map(str::to_owned).collect()
}

/// One row of the company list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub index: u32,
    pub company_name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: String,
}

/// Company list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyListResponse {
    pub ok: bool,
    pub rows: Vec<CompanyRow>,
    pub message: String,
}

/// Field-scoped validation failure for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorItem {
    /// Dotted field path, e.g. `empInfo.0.joinDate`.
    pub path: String,
    pub message: String,
}

/// Generic action envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterActionResponse {
    pub ok: bool,
    /// Index created or addressed by the action, when meaningful.
    pub index: Option<u32>,
    pub message: String,
    /// Non-empty only for a rejected submit.
    pub field_errors: Vec<FieldErrorItem>,
}

impl RosterActionResponse {
    fn success(message: impl Into<String>, index: Option<usize>) -> Self {
        Self {
            ok: true,
            index: index.and_then(|value| u32::try_from(value).ok()),
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            index: None,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }
}

/// Entry keys of one employee row and its nested rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeShape {
    pub key: String,
    pub skill_keys: Vec<String>,
    pub education_keys: Vec<String>,
}

/// Current view and nested row layout of the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormShape {
    /// `list` or `form`.
    pub view: String,
    pub edit_target: Option<u32>,
    pub employees: Vec<EmployeeShape>,
}

/// Lists saved companies, newest first.
///
/// # FFI contract
/// - Sync call, DB-backed on first use.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_list() -> CompanyListResponse {
    let result = with_session(|session| {
        session
            .companies()
            .iter()
            .enumerate()
            .map(|(index, company)| CompanyRow {
                index: u32::try_from(index).unwrap_or(u32::MAX),
                company_name: company.company_name.clone(),
                email: company.email.clone(),
                phone_number: company.phone_number.clone(),
                created_at: company.created_at.clone(),
            })
            .collect::<Vec<_>>()
    });

    match result {
        Ok(rows) => {
            let message = if rows.is_empty() {
                "No companies added yet.".to_string()
            } else {
                format!("Found {} companies.", rows.len())
            };
            CompanyListResponse {
                ok: true,
                rows,
                message,
            }
        }
        Err(err) => CompanyListResponse {
            ok: false,
            rows: Vec::new(),
            message: format!("roster_list failed: {err}"),
        },
    }
}

/// Opens an empty company form.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_open_new() -> RosterActionResponse {
    action(|session| {
        session.open_new();
        RosterActionResponse::success("New company form opened.", None)
    })
}

/// Opens the form preselected with the company at `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_open_edit(index: i64) -> RosterActionResponse {
    action(|session| {
        let Some(index) = to_index(index) else {
            return RosterActionResponse::failure("roster_open_edit failed: negative index");
        };
        match session.open_edit(index) {
            Ok(()) => RosterActionResponse::success("Company loaded for edit.", Some(index)),
            Err(err) => RosterActionResponse::failure(format!("roster_open_edit failed: {err}")),
        }
    })
}

/// Returns to the list view; the working copy is kept until the next open.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_show_list() -> RosterActionResponse {
    action(|session| {
        session.show_list();
        RosterActionResponse::success("List view shown.", None)
    })
}

/// Sets one working-copy field by dotted path. No validation runs.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_edit_field(path: String, value: String) -> RosterActionResponse {
    action(|session| match session.form_mut().edit_path(path.trim(), value) {
        Ok(()) => RosterActionResponse::success("Field updated.", None),
        Err(err) => RosterActionResponse::failure(format!("roster_edit_field failed: {err}")),
    })
}

/// Reads one working-copy field; `None` when the path is unknown or missing.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_field_value(path: String) -> Option<String> {
    let path = path.trim().parse::<FieldPath>().ok()?;
    with_session(|session| {
        session
            .form()
            .working_copy()
            .field(path)
            .map(str::to_owned)
    })
    .ok()
    .flatten()
}

/// Returns view state and entry keys for stable row rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_form_shape() -> FormShape {
    with_session(|session| FormShape {
        view: view_label(session.view()).to_string(),
        edit_target: session
            .edit_target()
            .and_then(|value| u32::try_from(value).ok()),
        employees: session
            .form()
            .working_copy()
            .employees
            .iter()
            .map(|employee| EmployeeShape {
                key: employee.key.to_string(),
                skill_keys: employee.skills.iter().map(|s| s.key.to_string()).collect(),
                education_keys: employee
                    .education
                    .iter()
                    .map(|e| e.key.to_string())
                    .collect(),
            })
            .collect(),
    })
    .unwrap_or_else(|_| FormShape {
        view: view_label(View::List).to_string(),
        edit_target: None,
        employees: Vec::new(),
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn roster_append_employee() -> RosterActionResponse {
    action(|session| {
        let index = session.form_mut().append_employee();
        RosterActionResponse::success("Employee added.", Some(index))
    })
}

/// Removes one employee; out-of-range or negative index is a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_remove_employee(index: i64) -> RosterActionResponse {
    action(|session| {
        let removed = to_index(index)
            .map(|index| session.form_mut().remove_employee(index))
            .unwrap_or(false);
        removal_response(removed, "Employee removed.")
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn roster_append_skill(employee: i64) -> RosterActionResponse {
    action(|session| {
        match to_index(employee).and_then(|employee| session.form_mut().append_skill(employee)) {
            Some(index) => RosterActionResponse::success("Skill added.", Some(index)),
            None => RosterActionResponse::failure("roster_append_skill failed: no such employee"),
        }
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn roster_remove_skill(employee: i64, skill: i64) -> RosterActionResponse {
    action(|session| {
        let removed = match (to_index(employee), to_index(skill)) {
            (Some(employee), Some(skill)) => session.form_mut().remove_skill(employee, skill),
            _ => false,
        };
        removal_response(removed, "Skill removed.")
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn roster_append_education(employee: i64) -> RosterActionResponse {
    action(|session| {
        match to_index(employee).and_then(|employee| session.form_mut().append_education(employee))
        {
            Some(index) => RosterActionResponse::success("Education added.", Some(index)),
            None => {
                RosterActionResponse::failure("roster_append_education failed: no such employee")
            }
        }
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn roster_remove_education(employee: i64, education: i64) -> RosterActionResponse {
    action(|session| {
        let removed = match (to_index(employee), to_index(education)) {
            (Some(employee), Some(education)) => {
                session.form_mut().remove_education(employee, education)
            }
            _ => false,
        };
        removal_response(removed, "Education removed.")
    })
}

/// Discards edits since the form was opened.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_reset() -> RosterActionResponse {
    action(|session| {
        session.reset();
        RosterActionResponse::success("Form reset.", None)
    })
}

/// Validates and saves the working copy.
///
/// # FFI contract
/// - On success `message` carries the save acknowledgment to show.
/// - On validation failure `field_errors` lists every failing field.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_submit() -> RosterActionResponse {
    action(|session| {
        let prompter = RecordingPrompter::answering(true);
        match session.submit(&prompter) {
            Ok(outcome) => {
                let message = prompter.notifications().join("\n");
                RosterActionResponse::success(message, Some(outcome.index))
            }
            Err(SessionError::Invalid(errors)) => RosterActionResponse {
                ok: false,
                index: None,
                message: format!("roster_submit failed: {} field(s) invalid", errors.len()),
                field_errors: errors
                    .iter()
                    .map(|entry| FieldErrorItem {
                        path: entry.path.to_string(),
                        message: entry.error.to_string(),
                    })
                    .collect(),
            },
            Err(err) => RosterActionResponse::failure(format!("roster_submit failed: {err}")),
        }
    })
}

/// Deletes the company at `index`.
///
/// `confirmed` is the answer of the confirmation dialog the UI showed first;
/// `false` leaves the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_delete(index: i64, confirmed: bool) -> RosterActionResponse {
    action(|session| {
        let Some(index) = to_index(index) else {
            return RosterActionResponse::failure("roster_delete failed: negative index");
        };
        let prompter = PresetPrompter {
            answer: confirmed,
        };
        match session.delete(index, &prompter) {
            Ok(true) => RosterActionResponse::success("Company deleted.", Some(index)),
            Ok(false) => RosterActionResponse::success("Delete cancelled.", None),
            Err(err) => RosterActionResponse::failure(format!("roster_delete failed: {err}")),
        }
    })
}

fn action(
    f: impl FnOnce(&mut RosterSession<SqliteBlobStore>) -> RosterActionResponse,
) -> RosterActionResponse {
    with_session(f).unwrap_or_else(|err| RosterActionResponse::failure(err))
}

fn removal_response(removed: bool, message: &str) -> RosterActionResponse {
    if removed {
        RosterActionResponse::success(message, None)
    } else {
        RosterActionResponse::success("Nothing to remove.", None)
    }
}

fn to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

fn view_label(view: View) -> &'static str {
    match view {
        View::List => "list",
        View::Form => "form",
    }
}

fn resolve_db_path() -> PathBuf {
    ROSTER_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("ROSTER_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(ROSTER_DB_FILE_NAME)
        })
        .clone()
}

fn with_session<T>(
    f: impl FnOnce(&mut RosterSession<SqliteBlobStore>) -> T,
) -> Result<T, String> {
    let mut guard = SESSION
        .get_or_init(|| Mutex::new(None))
        .lock()
        .map_err(|_| "roster session lock poisoned".to_string())?;

    let session = match guard.take() {
        Some(session) => session,
        None => {
            let conn = open_db(resolve_db_path())
                .map_err(|err| format!("roster DB open failed: {err}"))?;
            let blob_store = SqliteBlobStore::try_new(conn)
                .map_err(|err| format!("roster store init failed: {err}"))?;
            RosterSession::open(blob_store)
        }
    };
    Ok(f(guard.insert(session)))
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, designation_catalog, init_logging, ping, roster_append_employee,
        roster_append_skill, roster_delete, roster_edit_field, roster_field_value,
        roster_form_shape, roster_list, roster_open_edit, roster_open_new, roster_remove_employee,
        roster_remove_skill, roster_reset, roster_submit, skill_catalog,
    };
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Session state is process-wide; tests that drive the form take turns.
    static FORM_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn catalogs_expose_fixed_labels() {
        let skills = skill_catalog();
        assert_eq!(skills.len(), 22);
        assert!(skills.contains(&"Node.js".to_string()));
        assert_eq!(
            designation_catalog(),
            vec!["Developer", "Manager", "System Admin", "Team Lead", "PM"]
        );
    }

    #[test]
    fn submit_creates_company_visible_in_list() {
        let _guard = FORM_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let name = unique_token("ffi-create");

        assert!(roster_open_new().ok);
        fill_required(&name);
        let employee = roster_append_employee();
        assert_eq!(employee.index, Some(0));
        roster_edit_field("empInfo.0.empName".into(), "Ada".into());
        roster_edit_field("empInfo.0.joinDate".into(), "2020-01-01".into());
        roster_edit_field("empInfo.0.email".into(), "ada@example.test".into());
        roster_edit_field("empInfo.0.phoneNumber".into(), "555".into());

        let response = roster_submit();
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.message, "Company details saved successfully.");
        assert_eq!(response.index, Some(0));
        assert_eq!(roster_form_shape().view, "list");

        let list = roster_list();
        assert_eq!(list.rows[0].company_name, name);
    }

    #[test]
    fn submit_reports_field_errors() {
        let _guard = FORM_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        roster_open_new();
        roster_edit_field("companyName".into(), "x".repeat(51));

        let response = roster_submit();
        assert!(!response.ok);
        let paths = response
            .field_errors
            .iter()
            .map(|item| item.path.as_str())
            .collect::<Vec<_>>();
        assert_eq!(paths, vec!["companyName", "email", "phoneNumber"]);
        assert_eq!(roster_form_shape().view, "form");
    }

    #[test]
    fn negative_and_past_end_indices_are_noops() {
        let _guard = FORM_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        roster_open_new();
        roster_append_employee();
        roster_append_skill(0);

        assert_eq!(roster_remove_employee(-1).message, "Nothing to remove.");
        assert_eq!(roster_remove_employee(1).message, "Nothing to remove.");
        assert_eq!(roster_remove_skill(0, -1).message, "Nothing to remove.");
        assert!(!roster_append_skill(-1).ok);
        assert!(!roster_open_edit(-1).ok);
        assert!(!roster_delete(-1, true).ok);

        let shape = roster_form_shape();
        assert_eq!(shape.employees.len(), 1);
        assert_eq!(shape.employees[0].skill_keys.len(), 1);
    }

    #[test]
    fn edit_reset_and_confirmed_delete() {
        let _guard = FORM_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let name = unique_token("ffi-delete");
        roster_open_new();
        fill_required(&name);
        assert!(roster_submit().ok);

        assert!(roster_open_edit(0).ok);
        assert_eq!(roster_field_value("companyName".into()), Some(name.clone()));
        roster_edit_field("companyName".into(), "changed".into());
        roster_reset();
        assert_eq!(roster_field_value("companyName".into()), Some(name.clone()));

        let declined = roster_delete(0, false);
        assert!(declined.ok);
        assert_eq!(roster_list().rows[0].company_name, name);

        assert!(roster_delete(0, true).ok);
        assert!(roster_list()
            .rows
            .iter()
            .all(|row| row.company_name != name));
    }

    fn fill_required(name: &str) {
        assert!(roster_edit_field("companyName".into(), name.to_string()).ok);
        assert!(roster_edit_field("email".into(), "hq@example.test".into()).ok);
        assert!(roster_edit_field("phoneNumber".into(), "555-0100".into()).ok);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
