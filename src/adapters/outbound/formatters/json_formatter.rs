use crate::application::dto::{AnalysisResponse, ReportMetadata, VulnerabilityAnalysis};
use crate::ports::outbound::ReportFormatter;
use crate::remediation::domain::{
    GraphSummary, GraphSummaryError, HighRiskDependency, JFrogVulnerability, UpgradeRecommendation,
    VersionRecommendation,
};
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    project: Option<&'a str>,
    graph_summary: GraphSummaryView,
    summary: AnalysisSummary,
    analyses: Vec<Analysis<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    run_id: &'a str,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

/// Graph statistics, or the marker for a tree that produced no nodes
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GraphSummaryView {
    Summary {
        total_dependencies: usize,
        direct_count: usize,
        transitive_count: usize,
        max_depth: usize,
        high_risk_dependencies: Vec<HighRiskDependency>,
    },
    Error {
        error: String,
    },
}

impl From<std::result::Result<GraphSummary, GraphSummaryError>> for GraphSummaryView {
    fn from(summary: std::result::Result<GraphSummary, GraphSummaryError>) -> Self {
        match summary {
            Ok(s) => GraphSummaryView::Summary {
                total_dependencies: s.total_dependencies,
                direct_count: s.direct_count,
                transitive_count: s.transitive_count,
                max_depth: s.max_depth,
                high_risk_dependencies: s.high_risk_dependencies,
            },
            Err(e) => GraphSummaryView::Error {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct AnalysisSummary {
    vulnerabilities: usize,
    cannot_upgrade: usize,
    by_strategy: BTreeMap<&'static str, usize>,
}

#[derive(Debug, Serialize)]
struct Analysis<'a> {
    vulnerability: &'a JFrogVulnerability,
    version_recommendation: &'a VersionRecommendation,
    upgrade_recommendation: &'a UpgradeRecommendation,
}

/// JsonFormatter adapter for the machine-readable remediation report
///
/// This adapter implements the ReportFormatter port for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn metadata(metadata: &ReportMetadata) -> Metadata<'_> {
        Metadata {
            timestamp: &metadata.timestamp,
            run_id: &metadata.run_id,
            tool: Tool {
                name: &metadata.tool_name,
                version: &metadata.tool_version,
            },
        }
    }

    fn summary(response: &AnalysisResponse) -> AnalysisSummary {
        let mut by_strategy = BTreeMap::new();
        for analysis in &response.analyses {
            *by_strategy
                .entry(analysis.upgrade_recommendation.strategy().as_str())
                .or_insert(0) += 1;
        }
        AnalysisSummary {
            vulnerabilities: response.analyses.len(),
            cannot_upgrade: response.cannot_upgrade_count(),
            by_strategy,
        }
    }

    fn analysis(analysis: &VulnerabilityAnalysis) -> Analysis<'_> {
        Analysis {
            vulnerability: &analysis.vulnerability,
            version_recommendation: &analysis.version_recommendation,
            upgrade_recommendation: &analysis.upgrade_recommendation,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let report = Report {
            metadata: Self::metadata(&response.metadata),
            project: response.graph.root_project(),
            graph_summary: response.graph.get_summary().into(),
            summary: Self::summary(response),
            analyses: response.analyses.iter().map(Self::analysis).collect(),
        };

        let json = serde_json::to_string_pretty(&report)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remediation::domain::DependencyGraph;
    use crate::remediation::policies::OverridePropertyTable;
    use crate::remediation::services::{DependencyTreeParser, ParentVersions, UpgradeStrategyEngine};
    use serde_json::Value;

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "falcon-fix".to_string(),
            "0.3.0".to_string(),
            "2025-01-01T00:00:00Z".to_string(),
            "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
        )
    }

    fn analysis(
        graph: &DependencyGraph,
        ga: &str,
        version: &str,
        fix: &str,
    ) -> VulnerabilityAnalysis {
        let vulnerability = JFrogVulnerability::new(
            ga.to_string(),
            version.to_string(),
            vec![fix.to_string()],
            "CVE-2024-0001".to_string(),
            "HIGH".to_string(),
            String::new(),
        )
        .unwrap();
        let overrides = OverridePropertyTable::empty();
        let upgrade = UpgradeStrategyEngine::new(graph, &overrides)
            .analyze(&vulnerability, &ParentVersions::new());
        VulnerabilityAnalysis {
            version_recommendation: VersionRecommendation::unavailable(&vulnerability, "offline"),
            upgrade_recommendation: upgrade,
            vulnerability,
        }
    }

    #[test]
    fn test_format_report() {
        let graph = DependencyTreeParser::parse(
            "com.example:app:1.0\n├── g:starter:3.0\n│   └── g:core:1.0.0\n└── g:direct:2.0\n",
        );
        let analyses = vec![
            analysis(&graph, "g:direct", "2.0", "2.0.1"),
            analysis(&graph, "g:core", "1.0.0", "3.0.0"),
        ];
        let response = AnalysisResponse::new(metadata(), graph, analyses);

        let output = JsonFormatter::new().format(&response).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["project"], "com.example:app");
        assert_eq!(json["metadata"]["tool"]["name"], "falcon-fix");
        assert_eq!(json["metadata"]["run_id"], "urn:uuid:12345678-1234-1234-1234-123456789012");
        assert_eq!(json["graph_summary"]["total_dependencies"], 4);
        assert_eq!(json["graph_summary"]["max_depth"], 2);

        assert_eq!(json["summary"]["vulnerabilities"], 2);
        assert_eq!(json["summary"]["cannot_upgrade"], 1);
        assert_eq!(json["summary"]["by_strategy"]["direct_upgrade"], 1);
        assert_eq!(json["summary"]["by_strategy"]["cannot_upgrade"], 1);

        let first = &json["analyses"][0];
        assert_eq!(first["vulnerability"]["ga"], "g:direct");
        assert_eq!(first["version_recommendation"]["risk_level"], "HIGH");
        assert_eq!(first["upgrade_recommendation"]["strategy"], "direct_upgrade");
        assert_eq!(json["analyses"][1]["upgrade_recommendation"]["strategy"], "cannot_upgrade");
    }

    #[test]
    fn test_format_empty_graph() {
        let response = AnalysisResponse::new(metadata(), DependencyGraph::new(), Vec::new());

        let output = JsonFormatter::new().format(&response).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["graph_summary"]["error"], "No dependencies parsed");
        assert!(json["project"].is_null());
        assert_eq!(json["analyses"].as_array().unwrap().len(), 0);
    }
}
