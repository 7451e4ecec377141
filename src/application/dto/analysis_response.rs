use crate::remediation::domain::{
    DependencyGraph, JFrogVulnerability, UpgradeRecommendation, UpgradeStrategy,
    VersionRecommendation,
};
use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "falcon-fix";

/// Provenance of one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339
    pub timestamp: String,
    /// `urn:uuid:` identifier, unique per run
    pub run_id: String,
}

impl ReportMetadata {
    pub fn new(tool_name: String, tool_version: String, timestamp: String, run_id: String) -> Self {
        Self {
            tool_name,
            tool_version,
            timestamp,
            run_id,
        }
    }

    /// Metadata for a run starting now
    pub fn generate() -> Self {
        Self::new(
            TOOL_NAME.to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            Utc::now().to_rfc3339(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }
}

/// Everything learned about one vulnerability
#[derive(Debug, Clone)]
pub struct VulnerabilityAnalysis {
    pub vulnerability: JFrogVulnerability,
    pub version_recommendation: VersionRecommendation,
    pub upgrade_recommendation: UpgradeRecommendation,
}

/// AnalysisResponse - Response DTO from the analyze-vulnerabilities use case
///
/// Holds the scored graph itself so formatters can derive the summary and
/// the tree overview they need. Analyses keep the input order.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub metadata: ReportMetadata,
    pub graph: DependencyGraph,
    pub analyses: Vec<VulnerabilityAnalysis>,
}

impl AnalysisResponse {
    pub fn new(
        metadata: ReportMetadata,
        graph: DependencyGraph,
        analyses: Vec<VulnerabilityAnalysis>,
    ) -> Self {
        Self {
            metadata,
            graph,
            analyses,
        }
    }

    /// Number of vulnerabilities left without a safe upgrade path
    pub fn cannot_upgrade_count(&self) -> usize {
        self.analyses
            .iter()
            .filter(|a| a.upgrade_recommendation.strategy() == UpgradeStrategy::CannotUpgrade)
            .count()
    }
}
