use crate::remediation::domain::JFrogVulnerability;
use crate::shared::Result;
use std::path::Path;

/// ScanReportReader port for loading vulnerability scanner findings
pub trait ScanReportReader {
    /// Reads all findings from a scan report, in report order
    ///
    /// Entries that do not name a `group:artifact:version` component are
    /// skipped rather than failing the whole report.
    ///
    /// # Arguments
    /// * `path` - Path to the scan report
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid report
    fn read_scan_report(&self, path: &Path) -> Result<Vec<JFrogVulnerability>>;
}
