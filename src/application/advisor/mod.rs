//! Version advisor: chooses which fixed version to upgrade to.
mod offline_advisor;
pub mod prompts;
pub mod tools;
mod version_advisor;

pub use offline_advisor::OfflineAdvisor;
pub use version_advisor::{parse_response, VersionAdvisor, DEFAULT_MAX_TOOL_ROUNDS};

use crate::remediation::domain::{DependencyGraph, JFrogVulnerability, VersionRecommendation};
use crate::shared::Result;
use async_trait::async_trait;

/// Produces a version recommendation for one vulnerability
///
/// An error means no recommendation could be produced at all; callers record
/// it with [`VersionRecommendation::analysis_failed`].
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(
        &self,
        vulnerability: &JFrogVulnerability,
        graph: &DependencyGraph,
    ) -> Result<VersionRecommendation>;
}
