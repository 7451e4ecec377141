use crate::application::dto::{AnalysisResponse, VulnerabilityAnalysis};
use crate::ports::outbound::ReportFormatter;
use crate::remediation::domain::{GraphSummary, UpgradeRecommendation, VersionRecommendation};
use crate::shared::Result;

/// Markdown table header for high-risk dependencies
const HIGH_RISK_TABLE_HEADER: &str = "| Dependency | Version | Impact Score |\n";

/// Markdown table separator line for high-risk dependencies
const HIGH_RISK_TABLE_SEPARATOR: &str = "|------------|---------|--------------|\n";

/// Markdown table header for the vulnerability overview
const OVERVIEW_TABLE_HEADER: &str =
    "| Dependency | Current Version | Recommended Version | Strategy | Risk |\n";

/// Markdown table separator line for the vulnerability overview
const OVERVIEW_TABLE_SEPARATOR: &str =
    "|------------|-----------------|---------------------|----------|------|\n";

/// MarkdownFormatter adapter for the human-readable remediation plan
///
/// This adapter implements the ReportFormatter port for Markdown format:
/// a graph summary, the high-risk dependencies, an overview table, and one
/// section per vulnerability with the recommended version and upgrade steps.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn bullet_list(output: &mut String, items: &[String]) {
        for item in items.iter().filter(|i| !i.trim().is_empty()) {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, response: &AnalysisResponse) {
        output.push_str("# Dependency Remediation Plan\n\n");
        output.push_str(&format!(
            "**Project:** {}  \n",
            response.graph.root_project().unwrap_or("(unknown)")
        ));
        output.push_str(&format!(
            "**Generated:** {} by {} {}\n\n",
            response.metadata.timestamp, response.metadata.tool_name, response.metadata.tool_version
        ));
    }

    fn render_graph_summary(&self, output: &mut String, response: &AnalysisResponse) {
        output.push_str("## Dependency Graph\n\n");

        let summary: GraphSummary = match response.graph.get_summary() {
            Ok(summary) => summary,
            Err(e) => {
                output.push_str(&format!("_{}._\n\n", e));
                return;
            }
        };

        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Total dependencies | {} |\n", summary.total_dependencies));
        output.push_str(&format!("| Direct | {} |\n", summary.direct_count));
        output.push_str(&format!("| Transitive | {} |\n", summary.transitive_count));
        output.push_str(&format!("| Max depth | {} |\n\n", summary.max_depth));

        output.push_str("### High-Risk Dependencies\n\n");
        if summary.high_risk_dependencies.is_empty() {
            output.push_str("No dependency has an impact score above 0.5.\n\n");
        } else {
            output.push_str(
                "Changing these components affects the largest part of the project.\n\n",
            );
            output.push_str(HIGH_RISK_TABLE_HEADER);
            output.push_str(HIGH_RISK_TABLE_SEPARATOR);
            for dep in &summary.high_risk_dependencies {
                output.push_str(&format!(
                    "| {} | {} | {:.3} |\n",
                    Self::escape_markdown_table_cell(&dep.ga),
                    Self::escape_markdown_table_cell(&dep.version),
                    dep.impact_score
                ));
            }
            output.push('\n');
        }

        output.push_str("<details>\n<summary>Dependency tree</summary>\n\n```text\n");
        output.push_str(&response.graph.pretty_print());
        output.push_str("\n```\n\n</details>\n\n");
    }

    fn render_overview(&self, output: &mut String, analyses: &[VulnerabilityAnalysis]) {
        output.push_str("## Vulnerabilities\n\n");

        if analyses.is_empty() {
            output.push_str("No vulnerabilities to remediate.\n\n");
            return;
        }

        output.push_str(OVERVIEW_TABLE_HEADER);
        output.push_str(OVERVIEW_TABLE_SEPARATOR);
        for analysis in analyses {
            let upgrade = &analysis.upgrade_recommendation;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(analysis.vulnerability.ga()),
                Self::escape_markdown_table_cell(analysis.vulnerability.version()),
                Self::escape_markdown_table_cell(
                    &analysis.version_recommendation.recommended_version
                ),
                upgrade.strategy(),
                upgrade.risk_level()
            ));
        }
        output.push('\n');
    }

    fn render_analysis(&self, output: &mut String, index: usize, analysis: &VulnerabilityAnalysis) {
        let vuln = &analysis.vulnerability;
        let title = if vuln.cve_id().is_empty() {
            vuln.ga().to_string()
        } else {
            format!("{} ({})", vuln.ga(), vuln.cve_id())
        };
        output.push_str(&format!("### {}. {}\n\n", index + 1, title));

        output.push_str(&format!("- **Current version:** {}\n", vuln.version()));
        output.push_str(&format!("- **Severity:** {}\n", vuln.severity()));
        let fixes = if vuln.fixed_versions().is_empty() {
            "none listed".to_string()
        } else {
            vuln.fixed_versions().join(", ")
        };
        output.push_str(&format!("- **Fixed versions:** {}\n", fixes));
        if !vuln.description().is_empty() {
            output.push_str(&format!("- **Description:** {}\n", vuln.description()));
        }
        output.push('\n');

        self.render_version_recommendation(output, &analysis.version_recommendation);
        self.render_upgrade_recommendation(output, &analysis.upgrade_recommendation);
    }

    fn render_version_recommendation(&self, output: &mut String, rec: &VersionRecommendation) {
        output.push_str("#### Recommended Version\n\n");
        output.push_str(&format!(
            "**{}** (risk: {})\n\n",
            rec.recommended_version, rec.risk_level
        ));

        for line in rec.reasoning.lines() {
            output.push_str(&format!("> {}\n", line));
        }
        output.push('\n');

        if !rec.fallback_versions.is_empty() {
            output.push_str(&format!(
                "**Fallback versions:** {}\n\n",
                rec.fallback_versions.join(", ")
            ));
        }
        if !rec.breaking_changes.is_empty() {
            output.push_str("**Breaking changes to watch for:**\n\n");
            Self::bullet_list(output, &rec.breaking_changes);
        }
        if !rec.testing_recommendations.is_empty() {
            output.push_str("**Testing recommendations:**\n\n");
            Self::bullet_list(output, &rec.testing_recommendations);
        }
    }

    fn render_upgrade_recommendation(&self, output: &mut String, rec: &UpgradeRecommendation) {
        output.push_str("#### Upgrade Strategy\n\n");
        output.push_str(&format!(
            "**{}** (risk: {})\n\n",
            rec.strategy(),
            rec.risk_level()
        ));
        output.push_str(&format!(
            "Change **{}** to **{}**\n\n",
            rec.upgrade_target_ga(),
            rec.upgrade_target_version()
        ));

        output.push_str("**Steps:**\n\n```text\n");
        for step in rec.steps() {
            output.push_str(step);
            output.push('\n');
        }
        output.push_str("```\n\n");

        if rec.warnings().iter().any(|w| !w.trim().is_empty()) {
            output.push_str("**Warnings:**\n\n");
            Self::bullet_list(output, rec.warnings());
        }
        if !rec.testing_focus().is_empty() {
            output.push_str("**Testing focus:**\n\n");
            Self::bullet_list(output, rec.testing_focus());
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, response);
        self.render_graph_summary(&mut output, response);
        self.render_overview(&mut output, &response.analyses);
        for (index, analysis) in response.analyses.iter().enumerate() {
            self.render_analysis(&mut output, index, analysis);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ReportMetadata;
    use crate::remediation::domain::{DependencyGraph, JFrogVulnerability};
    use crate::remediation::policies::OverridePropertyTable;
    use crate::remediation::services::{DependencyTreeParser, ParentVersions, UpgradeStrategyEngine};

    const TREE: &str = "\
com.example:demo-service:1.0.0
├── org.springframework.boot:spring-boot-starter-json:3.5.3
│   └── com.fasterxml.jackson.core:jackson-databind:2.19.1
└── org.apache.commons:commons-text:1.10.0
";

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
        fixes: &[&str],
    ) -> VulnerabilityAnalysis {
        let vulnerability = JFrogVulnerability::new(
            ga.to_string(),
            version.to_string(),
            fixes.iter().map(|s| s.to_string()).collect(),
            "CVE-2024-0002".to_string(),
            "CRITICAL".to_string(),
            "Unsafe | deserialization".to_string(),
        )
        .unwrap();
        let overrides = OverridePropertyTable::spring_boot();
        let upgrade = UpgradeStrategyEngine::new(graph, &overrides)
            .analyze(&vulnerability, &ParentVersions::new());
        VulnerabilityAnalysis {
            version_recommendation: VersionRecommendation::unavailable(
                &vulnerability,
                "Analysis could not complete.\nSecond line.",
            ),
            upgrade_recommendation: upgrade,
            vulnerability,
        }
    }

    fn response() -> AnalysisResponse {
        let graph = DependencyTreeParser::parse(TREE);
        let analyses = vec![
            analysis(
                &graph,
                "com.fasterxml.jackson.core:jackson-databind",
                "2.19.1",
                &["2.19.2", "2.19.3", "2.20.0"],
            ),
            analysis(&graph, "org.apache.commons:commons-text", "1.10.0", &["1.10.1"]),
        ];
        AnalysisResponse::new(metadata(), graph, analyses)
    }

    #[test]
    fn test_format_sections() {
        let output = MarkdownFormatter::new().format(&response()).unwrap();

        assert!(output.starts_with("# Dependency Remediation Plan\n\n"));
        assert!(output.contains("**Project:** com.example:demo-service"));
        assert!(output.contains("| Total dependencies | 4 |"));
        assert!(output.contains("### High-Risk Dependencies"));
        assert!(output.contains("Dependency Graph for: com.example:demo-service"));
        assert!(output.contains("## Vulnerabilities"));
        assert!(output.contains(
            "### 1. com.fasterxml.jackson.core:jackson-databind (CVE-2024-0002)"
        ));
        assert!(output.contains("### 2. org.apache.commons:commons-text (CVE-2024-0002)"));
    }

    #[test]
    fn test_format_recommendation_details() {
        let output = MarkdownFormatter::new().format(&response()).unwrap();

        assert!(output.contains("**2.19.2** (risk: HIGH)"));
        assert!(output.contains("> Analysis could not complete.\n> Second line.\n"));
        assert!(output.contains("**Fallback versions:** 2.19.3, 2.20.0"));
        assert!(output.contains("**bom_override** (risk: LOW)"));
        assert!(output.contains("<jackson-bom.version>2.19.2</jackson-bom.version>"));
        assert!(output.contains("**direct_upgrade** (risk: LOW)"));
        assert!(output.contains("- This is a patch version jump\n"));
    }

    #[test]
    fn test_overview_escapes_table_cells() {
        let mut output = String::new();
        let response = response();
        MarkdownFormatter::new().render_overview(&mut output, &response.analyses);
        assert!(output.contains(
            "| org.apache.commons:commons-text | 1.10.0 | 1.10.1 | direct_upgrade | LOW |"
        ));
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_format_empty_graph_and_no_vulnerabilities() {
        let response = AnalysisResponse::new(metadata(), DependencyGraph::new(), Vec::new());
        let output = MarkdownFormatter::new().format(&response).unwrap();

        assert!(output.contains("**Project:** (unknown)"));
        assert!(output.contains("_No dependencies parsed._"));
        assert!(output.contains("No vulnerabilities to remediate."));
    }
}
