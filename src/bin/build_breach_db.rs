// Small dev utility: rebuild the explorer SQLite snapshot from one or more data files.
//
// Usage:
//   cargo run --bin build_breach_db -- [data_file ...] [--db db_path]
//
// This is intentionally lightweight and does not start the Tauri UI.

use breach_dashboard::config::{default_explorer_db_path, DEFAULT_DATASET_FILE};
use breach_dashboard::db::{open_sqlite_connection, read_snapshot_count};
use breach_dashboard::explorer::db_builder::ExplorerDbBuilder;
use breach_dashboard::importer::{BreachRecordLoader, BreachRecordLoaderImpl};
use breach_dashboard::store::RecordStore;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    breach_dashboard::logging::init();

    let mut data_files: Vec<PathBuf> = Vec::new();
    let mut db_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--db" {
            db_path = args.next().map(PathBuf::from);
        } else {
            data_files.push(PathBuf::from(arg));
        }
    }

    if data_files.is_empty() {
        data_files.push(PathBuf::from(DEFAULT_DATASET_FILE));
    }
    let db_path = db_path.unwrap_or_else(default_explorer_db_path);

    let loader = BreachRecordLoaderImpl::new();
    let datasets = loader.load_many(data_files).await?;
    let store = RecordStore::from_datasets(datasets);

    let builder = ExplorerDbBuilder::new(&db_path);
    let written = builder.rebuild(store.records())?;

    // 回读快照确认写入条数
    let conn = open_sqlite_connection(&db_path)?;
    let in_db = read_snapshot_count(&conn)?.unwrap_or(0);

    println!(
        "db_path={} records={} in_db={}",
        db_path.display(),
        written,
        in_db
    );
    Ok(())
}
