use crate::ports::outbound::{DependencyTreeReader, ScanReportReader};
use crate::remediation::domain::JFrogVulnerability;
use crate::shared::error::FalconError;
use crate::shared::security::read_input_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// Top-level shape of a scan report
#[derive(Debug, Deserialize)]
struct ScanReportFile {
    vulnerabilities: Vec<ScanReportEntry>,
}

/// One finding as exported by the scanner
#[derive(Debug, Deserialize)]
struct ScanReportEntry {
    /// `group:artifact:version`
    component: String,
    #[serde(default, alias = "cve_id")]
    cve: Option<String>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    fixed_versions: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

/// FileSystemReader adapter for reading input files from the file system
///
/// This adapter implements both DependencyTreeReader and ScanReportReader,
/// applying the same safety checks (no symlinks, regular files only, size
/// limit) to every file it opens.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn ensure_exists(path: &Path, suggestion: &str) -> Result<()> {
        if !path.exists() && path.symlink_metadata().is_err() {
            return Err(FalconError::InputFileNotFound {
                path: path.to_path_buf(),
                suggestion: suggestion.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Converts one report entry, or explains why it was skipped
    fn to_vulnerability(entry: ScanReportEntry) -> std::result::Result<JFrogVulnerability, String> {
        let parts: Vec<&str> = entry.component.split(':').collect();
        if parts.len() < 3 {
            return Err(format!(
                "component '{}' is not in group:artifact:version form",
                entry.component
            ));
        }
        let ga = format!("{}:{}", parts[0], parts[1]);
        let version = parts[parts.len() - 1].to_string();

        JFrogVulnerability::new(
            ga,
            version,
            entry.fixed_versions,
            entry.cve.unwrap_or_default(),
            entry.severity.unwrap_or_else(|| "UNKNOWN".to_string()),
            entry.description.unwrap_or_default(),
        )
        .map_err(|e| e.to_string())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeReader for FileSystemReader {
    fn read_tree(&self, path: &Path) -> Result<String> {
        Self::ensure_exists(
            path,
            "Save the tree first, for example: mvn dependency:tree -DoutputFile=tree.txt",
        )?;
        read_input_file(path, "dependency tree")
    }
}

impl ScanReportReader for FileSystemReader {
    fn read_scan_report(&self, path: &Path) -> Result<Vec<JFrogVulnerability>> {
        Self::ensure_exists(
            path,
            "Export the scan results as JSON and pass that file with --scan-report",
        )?;
        let content = read_input_file(path, "scan report")?;

        let report: ScanReportFile =
            serde_json::from_str(&content).map_err(|e| FalconError::ScanReportParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut vulnerabilities = Vec::with_capacity(report.vulnerabilities.len());
        for entry in report.vulnerabilities {
            match Self::to_vulnerability(entry) {
                Ok(vulnerability) => vulnerabilities.push(vulnerability),
                Err(reason) => eprintln!("⚠️  Warning: Skipping scan report entry: {}", reason),
            }
        }
        Ok(vulnerabilities)
    }
}
