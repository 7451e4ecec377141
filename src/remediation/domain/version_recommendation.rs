use super::upgrade_recommendation::RiskLevel;
use super::vulnerability::JFrogVulnerability;
use serde::Serialize;

/// Recommended version when the scanner lists no fix at all
pub const UNKNOWN_VERSION: &str = "UNKNOWN";

/// The version advisor's answer for one vulnerability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionRecommendation {
    pub ga: String,
    pub current_version: String,
    pub recommended_version: String,
    pub reasoning: String,
    pub risk_level: RiskLevel,
    pub breaking_changes: Vec<String>,
    pub testing_recommendations: Vec<String>,
    pub fallback_versions: Vec<String>,
}

impl VersionRecommendation {
    /// Conservative answer used when the advisor could not produce one
    /// (model unavailable, round budget exhausted, offline mode).
    pub fn unavailable(vulnerability: &JFrogVulnerability, reasoning: &str) -> Self {
        Self {
            reasoning: reasoning.to_string(),
            risk_level: RiskLevel::High,
            breaking_changes: vec!["Unknown - manual review required".to_string()],
            testing_recommendations: vec![
                "Full regression test required".to_string(),
                "Manual changelog review recommended".to_string(),
            ],
            ..Self::highest_fix(vulnerability)
        }
    }

    /// Answer used when the model replied but not with usable JSON.
    /// The raw reply is kept as reasoning.
    pub fn unparsed(vulnerability: &JFrogVulnerability, content: &str) -> Self {
        Self {
            reasoning: format!("LLM Response (unparsed):\n{}", content),
            risk_level: RiskLevel::Medium,
            breaking_changes: Vec::new(),
            testing_recommendations: vec!["Full regression test recommended".to_string()],
            ..Self::highest_fix(vulnerability)
        }
    }

    /// Answer recorded when the whole analysis for a vulnerability failed
    pub fn analysis_failed(vulnerability: &JFrogVulnerability, error: &str) -> Self {
        Self {
            reasoning: format!("Analysis failed: {}", error),
            risk_level: RiskLevel::High,
            breaking_changes: vec!["Manual review required".to_string()],
            testing_recommendations: vec!["Full regression test required".to_string()],
            ..Self::highest_fix(vulnerability)
        }
    }

    /// Highest listed fix as the recommendation, the next two as fallbacks
    fn highest_fix(vulnerability: &JFrogVulnerability) -> Self {
        Self {
            ga: vulnerability.ga().to_string(),
            current_version: vulnerability.version().to_string(),
            recommended_version: vulnerability
                .preferred_fix()
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            reasoning: String::new(),
            risk_level: RiskLevel::Medium,
            breaking_changes: Vec::new(),
            testing_recommendations: Vec::new(),
            fallback_versions: default_fallbacks(vulnerability),
        }
    }
}

/// Second and third highest fix versions, offered when the highest fails
pub fn default_fallbacks(vulnerability: &JFrogVulnerability) -> Vec<String> {
    vulnerability
        .fixes_highest_first()
        .into_iter()
        .skip(1)
        .take(2)
        .collect()
}
