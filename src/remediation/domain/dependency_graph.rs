use super::dependency_node::{round3, DependencyNode, NodeRecord};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Impact above which a node is reported as high risk in summaries
pub const HIGH_RISK_IMPACT_THRESHOLD: f64 = 0.5;

/// Maximum number of entries in [`GraphSummary::high_risk_dependencies`]
const HIGH_RISK_LIMIT: usize = 10;

/// Width of the separator rule in [`DependencyGraph::pretty_print`]
const RULE_WIDTH: usize = 60;

/// DependencyGraph aggregate built from one resolved dependency tree.
///
/// Nodes are keyed by `group:artifact` and kept in the order they were first
/// seen, so every listing derived from the graph is deterministic. The graph
/// is populated by the tree parser, scored once, then treated as read-only.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    root: Option<String>,
    nodes: Vec<DependencyNode>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Component key of the project the tree was generated for
    pub fn root_project(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn node(&self, ga: &str) -> Option<&DependencyNode> {
        self.index.get(ga).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, ga: &str) -> bool {
        self.index.contains_key(ga)
    }

    pub fn nodes(&self) -> &[DependencyNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn direct_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_direct()).count()
    }

    pub fn transitive_count(&self) -> usize {
        self.nodes.len() - self.direct_count()
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth()).max().unwrap_or(0)
    }

    pub(crate) fn set_root(&mut self, ga: &str) {
        self.root = Some(ga.to_string());
    }

    /// Records one occurrence of `ga` in the tree.
    ///
    /// The first occurrence creates the node with the given version, depth and
    /// direct flag. Every occurrence links the node to `parent` (both
    /// directions, no duplicates, no self-loops).
    pub(crate) fn record_occurrence(
        &mut self,
        ga: &str,
        version: &str,
        depth: usize,
        is_direct: bool,
        parent: Option<&str>,
    ) {
        let idx = match self.index.get(ga) {
            Some(&idx) => idx,
            None => {
                self.nodes.push(DependencyNode::new(
                    ga.to_string(),
                    version.to_string(),
                    depth,
                    is_direct,
                ));
                self.index.insert(ga.to_string(), self.nodes.len() - 1);
                self.nodes.len() - 1
            }
        };

        let Some(parent) = parent.filter(|p| *p != ga) else {
            return;
        };
        self.nodes[idx].add_parent(parent);
        if let Some(&parent_idx) = self.index.get(parent) {
            self.nodes[parent_idx].add_child(ga);
        }
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [DependencyNode] {
        &mut self.nodes
    }

    /// Everything known about one component plus a tiered risk label.
    ///
    /// Returns `None` when the component does not appear in the tree.
    pub fn get_dependency_info(&self, ga: &str) -> Option<DependencyInfo> {
        let node = self.node(ga)?;
        Some(DependencyInfo {
            node: node.to_record(),
            risk_assessment: risk_assessment(node.impact_score()).to_string(),
        })
    }

    /// Aggregate view of the graph.
    ///
    /// # Errors
    /// Returns [`GraphSummaryError::NoDependencies`] when nothing was parsed.
    pub fn get_summary(&self) -> Result<GraphSummary, GraphSummaryError> {
        if self.nodes.is_empty() {
            return Err(GraphSummaryError::NoDependencies);
        }

        let mut high_risk: Vec<HighRiskDependency> = self
            .nodes
            .iter()
            .filter(|n| n.impact_score() > HIGH_RISK_IMPACT_THRESHOLD)
            .map(|n| HighRiskDependency {
                ga: n.ga().to_string(),
                impact_score: round3(n.impact_score()),
                version: n.version().to_string(),
            })
            .collect();
        // stable: ties keep first-seen order
        high_risk.sort_by(|a, b| b.impact_score.total_cmp(&a.impact_score));
        high_risk.truncate(HIGH_RISK_LIMIT);

        let (direct, transitive): (Vec<_>, Vec<_>) =
            self.nodes.iter().partition(|n| n.is_direct());

        Ok(GraphSummary {
            project: self.root.clone(),
            total_dependencies: self.nodes.len(),
            direct_count: direct.len(),
            transitive_count: transitive.len(),
            max_depth: self.max_depth(),
            high_risk_dependencies: high_risk,
            direct_dependencies: to_record_map(&direct),
            transitive_dependencies: to_record_map(&transitive),
        })
    }

    /// Human-readable indented listing, shallowest first.
    ///
    /// Each line carries a `[D]`/`[T]` marker, the component with its version,
    /// the impact score to two decimals and a warning sign above the high-risk
    /// threshold.
    pub fn pretty_print(&self) -> String {
        let mut lines = vec![
            format!(
                "Dependency Graph for: {}",
                self.root.as_deref().unwrap_or("(unknown)")
            ),
            format!("Total: {} dependencies", self.nodes.len()),
            "-".repeat(RULE_WIDTH),
        ];

        let mut sorted: Vec<&DependencyNode> = self.nodes.iter().collect();
        sorted.sort_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.ga().cmp(b.ga())));

        for node in sorted {
            let indent = "  ".repeat(node.depth());
            let marker = if node.is_direct() { "[D]" } else { "[T]" };
            let warning = if node.impact_score() > HIGH_RISK_IMPACT_THRESHOLD {
                " ⚠️"
            } else {
                ""
            };
            lines.push(format!(
                "{}{} {}:{} (impact={:.2}){}",
                indent,
                marker,
                node.ga(),
                node.version(),
                node.impact_score(),
                warning
            ));
        }

        lines.join("\n")
    }
}

fn to_record_map(nodes: &[&DependencyNode]) -> BTreeMap<String, NodeRecord> {
    nodes
        .iter()
        .map(|n| (n.ga().to_string(), n.to_record()))
        .collect()
}

/// Tiered label for an impact score
pub fn risk_assessment(impact: f64) -> &'static str {
    if impact > 0.7 {
        "HIGH - Critical dependency, changes may have wide impact"
    } else if impact > 0.4 {
        "MEDIUM - Moderate impact, test thoroughly after changes"
    } else {
        "LOW - Isolated dependency, changes likely contained"
    }
}

/// Node snapshot returned by [`DependencyGraph::get_dependency_info`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyInfo {
    #[serde(flatten)]
    pub node: NodeRecord,
    pub risk_assessment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighRiskDependency {
    pub ga: String,
    pub impact_score: f64,
    pub version: String,
}

/// Aggregate statistics returned by [`DependencyGraph::get_summary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub project: Option<String>,
    pub total_dependencies: usize,
    pub direct_count: usize,
    pub transitive_count: usize,
    pub max_depth: usize,
    pub high_risk_dependencies: Vec<HighRiskDependency>,
    pub direct_dependencies: BTreeMap<String, NodeRecord>,
    pub transitive_dependencies: BTreeMap<String, NodeRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphSummaryError {
    #[error("No dependencies parsed")]
    NoDependencies,
}
