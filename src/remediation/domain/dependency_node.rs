use serde::Serialize;

/// Splits a `group:artifact` component key into its two halves.
///
/// Returns `None` unless both halves are non-empty and there is exactly one colon.
pub fn split_component_key(ga: &str) -> Option<(&str, &str)> {
    let (group, artifact) = ga.split_once(':')?;
    if group.is_empty() || artifact.is_empty() || artifact.contains(':') {
        return None;
    }
    Some((group, artifact))
}

/// One distinct component in the resolved dependency tree.
///
/// `depth`, `version` and `is_direct` are fixed by the first occurrence in the
/// tree; later occurrences only add edges. Scores are filled in once by the
/// graph scorer after the whole tree has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyNode {
    ga: String,
    version: String,
    depth: usize,
    is_direct: bool,
    parents: Vec<String>,
    children: Vec<String>,
    centrality_score: f64,
    impact_score: f64,
}

impl DependencyNode {
    pub fn new(ga: String, version: String, depth: usize, is_direct: bool) -> Self {
        Self {
            ga,
            version,
            depth,
            is_direct,
            parents: Vec::new(),
            children: Vec::new(),
            centrality_score: 0.0,
            impact_score: 0.0,
        }
    }

    pub fn ga(&self) -> &str {
        &self.ga
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_direct(&self) -> bool {
        self.is_direct
    }

    /// Parents in the order they were first seen
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Number of distinct parents plus number of distinct children
    pub fn degree(&self) -> usize {
        self.parents.len() + self.children.len()
    }

    pub fn centrality_score(&self) -> f64 {
        self.centrality_score
    }

    pub fn impact_score(&self) -> f64 {
        self.impact_score
    }

    pub fn group_id(&self) -> &str {
        self.ga.split_once(':').map_or(&self.ga, |(g, _)| g)
    }

    pub fn artifact_id(&self) -> &str {
        self.ga.split_once(':').map_or(&self.ga, |(_, a)| a)
    }

    pub(crate) fn add_parent(&mut self, parent: &str) {
        if !self.parents.iter().any(|p| p == parent) {
            self.parents.push(parent.to_string());
        }
    }

    pub(crate) fn add_child(&mut self, child: &str) {
        if !self.children.iter().any(|c| c == child) {
            self.children.push(child.to_string());
        }
    }

    pub(crate) fn set_scores(&mut self, centrality: f64, impact: f64) {
        self.centrality_score = centrality;
        self.impact_score = impact;
    }

    /// Serializable snapshot with scores rounded to three decimals
    pub fn to_record(&self) -> NodeRecord {
        NodeRecord {
            ga: self.ga.clone(),
            version: self.version.clone(),
            depth: self.depth,
            is_direct: self.is_direct,
            parents: self.parents.clone(),
            children: self.children.clone(),
            centrality_score: round3(self.centrality_score),
            impact_score: round3(self.impact_score),
        }
    }
}

/// Serializable view of a [`DependencyNode`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord {
    pub ga: String,
    pub version: String,
    pub depth: usize,
    pub is_direct: bool,
    pub parents: Vec<String>,
    pub children: Vec<String>,
    pub centrality_score: f64,
    pub impact_score: f64,
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
