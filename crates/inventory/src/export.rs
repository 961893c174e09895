use chrono::{DateTime, Utc};

/// Download name for a JSON export taken at `at`.
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("electrovault_backup_{}.json", at.timestamp())
}
