use crate::remediation::domain::ChangelogEntry;
use crate::shared::Result;
use async_trait::async_trait;

/// ChangelogRepository port for fetching release notes
///
/// This port abstracts the external source (e.g., GitHub Releases API)
/// used to look up what changed in a specific version of a component.
///
/// # Async Support
/// Lookups are async so several versions can be fetched concurrently.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait ChangelogRepository: Send + Sync {
    /// Fetches the changelog of one component version
    ///
    /// # Arguments
    /// * `ga` - Component key in `group:artifact` form
    /// * `version` - Version whose release notes are wanted
    ///
    /// # Returns
    /// * `Ok(Some(entry))` - release notes were found
    /// * `Ok(None)` - no source knows this component or version
    ///
    /// # Errors
    /// Returns an error only for invalid input; network failures while
    /// probing candidate sources are reported as not found.
    async fn fetch_changelog(&self, ga: &str, version: &str) -> Result<Option<ChangelogEntry>>;
}
