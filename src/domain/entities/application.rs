use chrono::NaiveDateTime;
use std::path::Path;

/// A stored deployable configuration bundle, as returned by the store.
/// Snapshots are immutable; re-importing under the same name produces a new
/// snapshot with a bumped `updated_at`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationRecord {
    pub name: String,
    pub application_file: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A bundle picked from disk, before it has been imported.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationBundle {
    pub file_name: String,
    pub content: String,
}

impl ApplicationBundle {
    /// The application name under which this bundle is stored: the file name
    /// without its extension.
    #[must_use]
    pub fn application_name(&self) -> String {
        Path::new(&self.file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        Path::new(&self.file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}
