use crate::remediation::domain::JFrogVulnerability;
use crate::remediation::services::ParentVersions;
use std::path::PathBuf;

/// Where the dependency tree comes from
#[derive(Debug, Clone)]
pub enum TreeInput {
    /// Output of `mvn dependency:tree` saved to a file
    File(PathBuf),
    /// Tree text already in memory (built-in sample, tests)
    Text(String),
}

/// Where the vulnerability findings come from
#[derive(Debug, Clone)]
pub enum ScanInput {
    /// Scanner export in JSON form
    File(PathBuf),
    /// Findings already in memory (built-in sample, tests)
    Findings(Vec<JFrogVulnerability>),
}

/// AnalysisRequest - Request DTO for the analyze-vulnerabilities use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub tree: TreeInput,
    pub scan: ScanInput,
    /// Newer versions available per parent component, newest first
    pub parent_versions: ParentVersions,
}

impl AnalysisRequest {
    pub fn new(tree: TreeInput, scan: ScanInput, parent_versions: ParentVersions) -> Self {
        Self {
            tree,
            scan,
            parent_versions,
        }
    }
}
