pub mod changelog;
pub mod dependency_graph;
pub mod dependency_node;
pub mod upgrade_recommendation;
pub mod version;
pub mod version_recommendation;
pub mod vulnerability;

pub use changelog::{ChangelogEntry, ChangelogRecord};
pub use dependency_graph::{
    DependencyGraph, DependencyInfo, GraphSummary, GraphSummaryError, HighRiskDependency,
};
pub use dependency_node::{split_component_key, DependencyNode, NodeRecord};
pub use upgrade_recommendation::{RiskLevel, UpgradeRecommendation, UpgradeStrategy};
pub use version::{ParsedVersion, VersionJump};
pub use version_recommendation::VersionRecommendation;
pub use vulnerability::JFrogVulnerability;
