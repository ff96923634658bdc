use serde::Serialize;

use crate::{config::Config, db::DataStoreHandle};

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Result of the database probe; every field is filled independently.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatabaseReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_or_not(present: bool) -> String {
    if present { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Probes the data store without ever failing.
///
/// The metadata call runs in its own task so a panicking store is reported
/// like any other error.
pub async fn probe_database(store: &DataStoreHandle, config: &Config) -> DatabaseReport {
    let mut report = DatabaseReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_or_not(config.database_url_set()),
        database_name: set_or_not(config.database_name_set()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match store {
        DataStoreHandle::Absent => {
            report.database = "❌ Database module not found (run enable-database first)".to_string();
        }
        DataStoreHandle::Uninitialized => {
            report.database = "⚠️  Available but not initialized".to_string();
        }
        DataStoreHandle::Ready(store) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();

            let store = store.clone();
            let listing =
                tokio::spawn(async move { store.list_collection_names(MAX_COLLECTIONS).await })
                    .await;

            match listing {
                Ok(Ok(mut names)) => {
                    names.truncate(MAX_COLLECTIONS);
                    report.collections = names;
                    report.database = "✅ Connected & Working".to_string();
                }
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "Database probe failed");
                    report.database =
                        format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Database probe task failed");
                    report.database = format!("❌ Error: {}", truncate(&e.to_string()));
                }
            }
        }
    }

    report
}
