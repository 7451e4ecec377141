use super::RecommendationService;
use crate::remediation::domain::{DependencyGraph, JFrogVulnerability, VersionRecommendation};
use crate::shared::Result;
use async_trait::async_trait;

const OFFLINE_REASONING: &str =
    "Offline mode: no model was consulted. Defaulting to highest fixed version.";

/// OfflineAdvisor answers every vulnerability with the conservative fallback
/// without touching the network.
pub struct OfflineAdvisor;

impl OfflineAdvisor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OfflineAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommendationService for OfflineAdvisor {
    async fn recommend(
        &self,
        vulnerability: &JFrogVulnerability,
        _graph: &DependencyGraph,
    ) -> Result<VersionRecommendation> {
        Ok(VersionRecommendation::unavailable(vulnerability, OFFLINE_REASONING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remediation::domain::RiskLevel;

    #[tokio::test]
    async fn test_offline_recommendation() {
        let vuln = JFrogVulnerability::new(
            "io.netty:netty-handler".to_string(),
            "4.1.100.Final".to_string(),
            vec!["4.1.118.Final".to_string()],
            String::new(),
            "MEDIUM".to_string(),
            String::new(),
        )
        .unwrap();

        let rec = OfflineAdvisor::new()
            .recommend(&vuln, &DependencyGraph::new())
            .await
            .unwrap();
        assert_eq!(rec.recommended_version, "4.1.118.Final");
        assert_eq!(rec.risk_level, RiskLevel::High);
        assert!(rec.reasoning.starts_with("Offline mode"));
        assert!(rec.fallback_versions.is_empty());
    }
}
