use serde::Serialize;
use std::fmt;

/// How a vulnerable component should be moved to a fixed version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStrategy {
    /// Change the version of a dependency declared in the project itself
    DirectUpgrade,
    /// Upgrade the dependency that pulls the vulnerable component in
    ParentUpgrade,
    /// Override the version property managed by the platform BOM
    BomOverride,
    /// Pin the transitive component explicitly, against its parent's expectations
    ForceOverride,
    /// No safe automatic path exists
    CannotUpgrade,
}

impl UpgradeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeStrategy::DirectUpgrade => "direct_upgrade",
            UpgradeStrategy::ParentUpgrade => "parent_upgrade",
            UpgradeStrategy::BomOverride => "bom_override",
            UpgradeStrategy::ForceOverride => "force_override",
            UpgradeStrategy::CannotUpgrade => "cannot_upgrade",
        }
    }
}

impl fmt::Display for UpgradeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered risk scale shared by upgrade plans and advisor answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// Case-insensitive parse of free-form text such as a model answer
    pub fn parse_lenient(text: &str) -> Option<Self> {
        match text.trim().to_ascii_uppercase().as_str() {
            "LOW" => Some(RiskLevel::Low),
            "MEDIUM" => Some(RiskLevel::Medium),
            "HIGH" => Some(RiskLevel::High),
            "CRITICAL" => Some(RiskLevel::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actionable remediation plan for one vulnerability.
///
/// Built only by the upgrade strategy engine and never changed afterwards.
/// `upgrade_target_*` name what the user actually edits: the vulnerable
/// component itself for direct, BOM and forced upgrades, the parent for a
/// parent upgrade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeRecommendation {
    pub(crate) vulnerable_ga: String,
    pub(crate) vulnerable_version: String,
    pub(crate) target_version: String,
    pub(crate) strategy: UpgradeStrategy,
    pub(crate) upgrade_target_ga: String,
    pub(crate) upgrade_target_version: String,
    pub(crate) risk_level: RiskLevel,
    pub(crate) steps: Vec<String>,
    pub(crate) warnings: Vec<String>,
    pub(crate) testing_focus: Vec<String>,
    pub(crate) parent_to_upgrade: Option<String>,
    pub(crate) parent_current_version: Option<String>,
    pub(crate) parent_target_version: Option<String>,
}

impl UpgradeRecommendation {
    pub fn vulnerable_ga(&self) -> &str {
        &self.vulnerable_ga
    }

    pub fn vulnerable_version(&self) -> &str {
        &self.vulnerable_version
    }

    pub fn target_version(&self) -> &str {
        &self.target_version
    }

    pub fn strategy(&self) -> UpgradeStrategy {
        self.strategy
    }

    pub fn upgrade_target_ga(&self) -> &str {
        &self.upgrade_target_ga
    }

    pub fn upgrade_target_version(&self) -> &str {
        &self.upgrade_target_version
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn testing_focus(&self) -> &[String] {
        &self.testing_focus
    }

    pub fn parent_to_upgrade(&self) -> Option<&str> {
        self.parent_to_upgrade.as_deref()
    }

    pub fn parent_current_version(&self) -> Option<&str> {
        self.parent_current_version.as_deref()
    }

    pub fn parent_target_version(&self) -> Option<&str> {
        self.parent_target_version.as_deref()
    }
}
