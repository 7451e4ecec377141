use falcon_fix::prelude::*;
use std::path::Path;

/// Mock DependencyTreeReader returning fixed tree text for any path
pub struct MockTreeReader {
    content: String,
}

impl MockTreeReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DependencyTreeReader for MockTreeReader {
    fn read_tree(&self, _path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// Mock ScanReportReader returning fixed findings, or failing when built with `failing`
pub struct MockScanReportReader {
    findings: Option<Vec<JFrogVulnerability>>,
}

impl MockScanReportReader {
    pub fn new(findings: Vec<JFrogVulnerability>) -> Self {
        Self {
            findings: Some(findings),
        }
    }

    pub fn failing() -> Self {
        Self { findings: None }
    }
}

impl ScanReportReader for MockScanReportReader {
    fn read_scan_report(&self, path: &Path) -> Result<Vec<JFrogVulnerability>> {
        match &self.findings {
            Some(findings) => Ok(findings.clone()),
            None => anyhow::bail!("Failed to parse scan report: {}", path.display()),
        }
    }
}
