use crate::application::advisor::RecommendationService;
use crate::application::dto::{
    AnalysisRequest, AnalysisResponse, ReportMetadata, ScanInput, TreeInput, VulnerabilityAnalysis,
};
use crate::ports::outbound::{DependencyTreeReader, ProgressReporter, ScanReportReader};
use crate::remediation::domain::{DependencyGraph, JFrogVulnerability, VersionRecommendation};
use crate::remediation::policies::OverridePropertyTable;
use crate::remediation::services::{DependencyTreeParser, UpgradeStrategyEngine};
use crate::shared::Result;

/// AnalyzeVulnerabilitiesUseCase - Core use case for remediation planning
///
/// Loads the dependency tree and the scanner findings, asks the
/// recommendation service for a target version per finding, and plans how to
/// get there with the upgrade strategy engine.
///
/// # Type Parameters
/// * `TR` - DependencyTreeReader implementation
/// * `SR` - ScanReportReader implementation
/// * `S` - RecommendationService implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeVulnerabilitiesUseCase<TR, SR, S, PR> {
    tree_reader: TR,
    scan_reader: SR,
    recommendation_service: S,
    progress_reporter: PR,
    overrides: OverridePropertyTable,
}

impl<TR, SR, S, PR> AnalyzeVulnerabilitiesUseCase<TR, SR, S, PR>
where
    TR: DependencyTreeReader,
    SR: ScanReportReader,
    S: RecommendationService,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeVulnerabilitiesUseCase with injected dependencies
    pub fn new(
        tree_reader: TR,
        scan_reader: SR,
        recommendation_service: S,
        progress_reporter: PR,
        overrides: OverridePropertyTable,
    ) -> Self {
        Self {
            tree_reader,
            scan_reader,
            recommendation_service,
            progress_reporter,
            overrides,
        }
    }

    /// Executes the analysis
    ///
    /// Every finding produces exactly one `VulnerabilityAnalysis`, in input
    /// order. A failing recommendation service degrades that finding to the
    /// fallback recommendation instead of aborting the run.
    ///
    /// # Errors
    /// Returns an error only when an input cannot be read or parsed
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let graph = self.load_graph(&request.tree)?;
        let vulnerabilities = self.load_vulnerabilities(request.scan)?;

        let total = vulnerabilities.len();
        if total == 0 {
            self.progress_reporter
                .report("✅ No vulnerabilities found in scan report");
        } else {
            self.progress_reporter
                .report(&format!("🔍 Analyzing {} vulnerabilities...", total));
        }

        let engine = UpgradeStrategyEngine::new(&graph, &self.overrides);
        let mut analyses = Vec::with_capacity(total);
        let mut degraded = 0;

        for (idx, vulnerability) in vulnerabilities.into_iter().enumerate() {
            let version_recommendation = match self
                .recommendation_service
                .recommend(&vulnerability, &graph)
                .await
            {
                Ok(recommendation) => recommendation,
                Err(e) => {
                    self.progress_reporter.report_warning(&format!(
                        "Analysis failed for {}: {}",
                        vulnerability.ga(),
                        e
                    ));
                    degraded += 1;
                    VersionRecommendation::analysis_failed(&vulnerability, &e.to_string())
                }
            };

            let upgrade_recommendation = engine.analyze_with_target(
                &vulnerability,
                &version_recommendation.recommended_version,
                &request.parent_versions,
            );

            self.progress_reporter
                .report_progress(idx + 1, total, Some(vulnerability.ga()));

            analyses.push(VulnerabilityAnalysis {
                vulnerability,
                version_recommendation,
                upgrade_recommendation,
            });
        }

        if total > 0 {
            self.progress_reporter.report_completion(&format!(
                "✅ Analysis complete: {} vulnerabilities, {} fell back to defaults",
                total, degraded
            ));
        }

        Ok(AnalysisResponse::new(
            ReportMetadata::generate(),
            graph,
            analyses,
        ))
    }

    fn load_graph(&self, input: &TreeInput) -> Result<DependencyGraph> {
        self.progress_reporter.report("📖 Loading dependency tree...");

        let graph = match input {
            TreeInput::File(path) => {
                DependencyTreeParser::parse(&self.tree_reader.read_tree(path)?)
            }
            TreeInput::Text(text) => DependencyTreeParser::parse(text),
        };

        if graph.is_empty() {
            self.progress_reporter
                .report_warning("No dependencies parsed from the dependency tree");
        } else {
            self.progress_reporter.report(&format!(
                "✅ Parsed {} dependencies ({} direct, {} transitive, max depth {})",
                graph.len(),
                graph.direct_count(),
                graph.transitive_count(),
                graph.max_depth()
            ));
        }
        Ok(graph)
    }

    fn load_vulnerabilities(&self, input: ScanInput) -> Result<Vec<JFrogVulnerability>> {
        match input {
            ScanInput::File(path) => {
                self.progress_reporter.report("📖 Loading scan report...");
                self.scan_reader.read_scan_report(&path)
            }
            ScanInput::Findings(findings) => Ok(findings),
        }
    }
}
