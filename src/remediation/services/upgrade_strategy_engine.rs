use crate::remediation::domain::version::{jump_type, same_major, same_major_minor, VersionJump};
use crate::remediation::domain::version_recommendation::UNKNOWN_VERSION;
use crate::remediation::domain::{
    DependencyGraph, JFrogVulnerability, RiskLevel, UpgradeRecommendation, UpgradeStrategy,
};
use crate::remediation::policies::OverridePropertyTable;
use std::collections::HashMap;

/// Newer versions available for a parent component, newest first
pub type ParentVersions = HashMap<String, Vec<String>>;

/// UpgradeStrategyEngine decides how a vulnerable component should be upgraded.
///
/// The decision is a pure function of the graph snapshot, the vulnerability,
/// the target version, the override-property table and the known parent
/// versions. It performs no I/O and never fails.
///
/// Decision order for a component:
/// 1. not in the graph, direct, or without recorded parents → direct upgrade
/// 2. first parent has newer versions available → parent upgrade
/// 3. component has a BOM property → BOM override
/// 4. target keeps major.minor → forced override (medium risk)
/// 5. target keeps major → forced override (high risk)
/// 6. otherwise → cannot upgrade
pub struct UpgradeStrategyEngine<'a> {
    graph: &'a DependencyGraph,
    overrides: &'a OverridePropertyTable,
}

impl<'a> UpgradeStrategyEngine<'a> {
    pub fn new(graph: &'a DependencyGraph, overrides: &'a OverridePropertyTable) -> Self {
        Self { graph, overrides }
    }

    /// Plans the upgrade to the highest fix version the scanner lists
    /// (`UNKNOWN` when the scanner lists none).
    pub fn analyze(
        &self,
        vulnerability: &JFrogVulnerability,
        parent_versions: &ParentVersions,
    ) -> UpgradeRecommendation {
        let target = vulnerability.preferred_fix();
        let target = target.as_deref().unwrap_or(UNKNOWN_VERSION);
        self.analyze_with_target(vulnerability, target, parent_versions)
    }

    /// Plans the upgrade of `vulnerability` to `target_version`
    pub fn analyze_with_target(
        &self,
        vulnerability: &JFrogVulnerability,
        target_version: &str,
        parent_versions: &ParentVersions,
    ) -> UpgradeRecommendation {
        let plan = Plan {
            ga: vulnerability.ga(),
            from: vulnerability.version(),
            to: target_version,
        };

        let Some(node) = self.graph.node(plan.ga) else {
            return plan.direct_upgrade();
        };
        if node.is_direct() {
            return plan.direct_upgrade();
        }
        let Some(parent) = node.parents().first() else {
            return plan.direct_upgrade();
        };

        if let Some(parent_target) = parent_versions.get(parent).and_then(|v| v.first()) {
            let parent_current = self
                .graph
                .node(parent)
                .map_or("unknown", |p| p.version());
            return plan.parent_upgrade(parent, parent_current, parent_target);
        }

        if let Some(property) = self.overrides.property_for(plan.ga) {
            return plan.bom_override(property);
        }

        if same_major_minor(plan.from, plan.to) {
            return plan.force_override(parent, RiskLevel::Medium);
        }
        if same_major(plan.from, plan.to) {
            return plan.force_override(parent, RiskLevel::High);
        }

        plan.cannot_upgrade(parent)
    }
}

/// The upgrade being planned; builds the recommendation text for each strategy
struct Plan<'a> {
    ga: &'a str,
    from: &'a str,
    to: &'a str,
}

impl Plan<'_> {
    fn group_artifact(&self) -> (&str, &str) {
        self.ga.split_once(':').unwrap_or((self.ga, self.ga))
    }

    fn recommendation(
        &self,
        strategy: UpgradeStrategy,
        risk_level: RiskLevel,
        steps: Vec<String>,
        warnings: Vec<String>,
        testing_focus: Vec<String>,
    ) -> UpgradeRecommendation {
        UpgradeRecommendation {
            vulnerable_ga: self.ga.to_string(),
            vulnerable_version: self.from.to_string(),
            target_version: self.to.to_string(),
            strategy,
            upgrade_target_ga: self.ga.to_string(),
            upgrade_target_version: self.to.to_string(),
            risk_level,
            steps,
            warnings,
            testing_focus,
            parent_to_upgrade: None,
            parent_current_version: None,
            parent_target_version: None,
        }
    }

    fn direct_upgrade(&self) -> UpgradeRecommendation {
        let jump = jump_type(self.from, self.to);
        let risk = match jump {
            VersionJump::Patch => RiskLevel::Low,
            VersionJump::Minor => RiskLevel::Medium,
            VersionJump::Major => RiskLevel::High,
        };

        let mut warnings = vec![format!("This is a {} version jump", jump)];
        if jump != VersionJump::Patch {
            warnings.push("Review the changelog for breaking changes".to_string());
        }

        self.recommendation(
            UpgradeStrategy::DirectUpgrade,
            risk,
            vec![
                "1. Open your pom.xml (or build.gradle)".to_string(),
                format!("2. Find the dependency: {}", self.ga),
                format!("3. Change version from {} to {}", self.from, self.to),
                "4. Run: mvn clean install".to_string(),
                "5. Run your test suite".to_string(),
            ],
            warnings,
            vec![
                "Unit tests for components using this dependency".to_string(),
                "Integration tests".to_string(),
            ],
        )
    }

    fn parent_upgrade(
        &self,
        parent: &str,
        parent_current: &str,
        parent_target: &str,
    ) -> UpgradeRecommendation {
        let parent_artifact = parent.split_once(':').map_or(parent, |(_, a)| a);

        let mut rec = self.recommendation(
            UpgradeStrategy::ParentUpgrade,
            RiskLevel::Low,
            vec![
                format!("1. DO NOT add {} directly to your pom.xml", self.ga),
                format!("2. Instead, upgrade the PARENT: {}", parent),
                format!(
                    "3. Change {} from {} to {}",
                    parent, parent_current, parent_target
                ),
                format!("4. The fixed {} will come automatically", self.ga),
                "5. Run: mvn dependency:tree to verify".to_string(),
                "6. Run your test suite".to_string(),
            ],
            vec![
                format!("⚠️ {} is a TRANSITIVE dependency", self.ga),
                format!("⚠️ It's brought in by {}", parent),
                "✅ Upgrading the parent is the SAFEST approach".to_string(),
            ],
            vec![
                format!("All functionality using {}", parent_artifact),
                "Integration tests".to_string(),
                "End-to-end tests".to_string(),
            ],
        );
        rec.upgrade_target_ga = parent.to_string();
        rec.upgrade_target_version = parent_target.to_string();
        rec.parent_to_upgrade = Some(parent.to_string());
        rec.parent_current_version = Some(parent_current.to_string());
        rec.parent_target_version = Some(parent_target.to_string());
        rec
    }

    fn bom_override(&self, property: &str) -> UpgradeRecommendation {
        let risk = if same_major_minor(self.from, self.to) {
            RiskLevel::Low
        } else {
            RiskLevel::Medium
        };
        let (_, artifact) = self.group_artifact();

        self.recommendation(
            UpgradeStrategy::BomOverride,
            risk,
            vec![
                "1. Open your pom.xml".to_string(),
                "2. Add this property to <properties> section:".to_string(),
                format!("   <{prop}>{}</{prop}>", self.to, prop = property),
                "3. This will override the version managed by Spring Boot BOM".to_string(),
                format!("4. Run: mvn dependency:tree | grep {}", artifact),
                format!("5. Verify it shows version {}", self.to),
                "6. Run your test suite".to_string(),
            ],
            vec![
                format!("⚠️ {} is managed by Spring Boot BOM", self.ga),
                "✅ Using BOM property is the RECOMMENDED way to override".to_string(),
                "This ensures all related modules use the same version".to_string(),
            ],
            vec![
                "All web/API endpoints".to_string(),
                "Serialization/deserialization tests".to_string(),
                "Integration tests".to_string(),
            ],
        )
    }

    fn force_override(&self, parent: &str, risk: RiskLevel) -> UpgradeRecommendation {
        let (group, artifact) = self.group_artifact();

        self.recommendation(
            UpgradeStrategy::ForceOverride,
            risk,
            vec![
                "1. ⚠️ WARNING: This is a forced override of a transitive dependency".to_string(),
                "2. Add explicit dependency to pom.xml:".to_string(),
                "   <dependency>".to_string(),
                format!("     <groupId>{}</groupId>", group),
                format!("     <artifactId>{}</artifactId>", artifact),
                format!("     <version>{}</version>", self.to),
                "   </dependency>".to_string(),
                format!("3. This will override the version from {}", parent),
                "4. Run: mvn dependency:tree to verify".to_string(),
                "5. ⚠️ EXTENSIVE TESTING REQUIRED".to_string(),
            ],
            vec![
                format!("🚨 This forces a version that {} was NOT tested with", parent),
                format!(
                    "🚨 {} expects {}, you're giving it {}",
                    parent, self.from, self.to
                ),
                "🚨 This might cause runtime errors if APIs changed".to_string(),
                format!("Consider upgrading {} instead if possible", parent),
            ],
            vec![
                "⚠️ FULL REGRESSION TEST REQUIRED".to_string(),
                format!("All functionality using {}", parent),
                "Runtime error detection (NoSuchMethodError, ClassNotFoundException)".to_string(),
                "Load testing".to_string(),
                "End-to-end tests".to_string(),
            ],
        )
    }

    fn cannot_upgrade(&self, parent: &str) -> UpgradeRecommendation {
        self.recommendation(
            UpgradeStrategy::CannotUpgrade,
            RiskLevel::Critical,
            vec![
                "1. 🚨 NO SAFE AUTOMATIC UPGRADE PATH".to_string(),
                "2. This requires MANUAL intervention:".to_string(),
                format!("   a. Check if {} has a newer version", parent),
                format!("   b. Check if there's an alternative to {}", parent),
                "   c. Consider accepting the vulnerability with mitigations".to_string(),
                format!("3. The version jump {} → {} is MAJOR", self.from, self.to),
                "4. Forcing this version WILL LIKELY BREAK your application".to_string(),
            ],
            vec![
                "🚨 CRITICAL: Major version change detected".to_string(),
                format!(
                    "🚨 {} → {} crosses major/minor boundaries",
                    self.from, self.to
                ),
                format!("🚨 {} almost certainly won't work with {}", parent, self.to),
                "🚨 Manual analysis required".to_string(),
            ],
            vec![
                "DO NOT PROCEED without manual analysis".to_string(),
                "Contact the library maintainers".to_string(),
                "Consider alternative libraries".to_string(),
            ],
        )
    }
}
