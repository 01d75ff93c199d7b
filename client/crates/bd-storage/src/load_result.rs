use bd_core::Session;

/// Result of loading the session - distinguishes "not found" from errors.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub session: Option<Session>,
    /// Present if a record existed but could not be used. The record has
    /// already been removed.
    pub corruption_error: Option<String>,
    /// The session was assembled from pre-versioned keys.
    pub migrated: bool,
}
