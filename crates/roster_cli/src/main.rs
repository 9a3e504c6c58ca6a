//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roster_core` linkage with deterministic output.
//! - Optionally print the company list stored in a roster database.
//!
//! Usage: `roster_cli [DB_PATH]`

use roster_core::db::open_db;
use roster_core::{CompanyStore, LoadStatus, SqliteBlobStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let Some(db_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    let blob_store = match open_db(&db_path)
        .map_err(|err| err.to_string())
        .and_then(|conn| SqliteBlobStore::try_new(conn).map_err(|err| err.to_string()))
    {
        Ok(blob_store) => blob_store,
        Err(err) => {
            eprintln!("roster_cli: cannot open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = CompanyStore::load(blob_store);
    if let LoadStatus::Degraded(err) = store.load_status() {
        eprintln!("roster_cli: stored list ignored: {err}");
    }

    println!("companies={}", store.len());
    for (index, company) in store.list().iter().enumerate() {
        println!(
            "{index}\t{}\t{}\t{}\t{}\temployees={}",
            company.company_name,
            company.email,
            company.phone_number,
            company.created_at,
            company.employees.len()
        );
    }
    ExitCode::SUCCESS
}
