use crate::remediation::domain::DependencyGraph;

/// Share of the impact score that depth can remove
const DEPTH_WEIGHT: f64 = 0.5;

/// Multiplier applied to dependencies the project declares itself
const DIRECT_BOOST: f64 = 1.2;

/// GraphScorer assigns centrality and impact to every node of a graph.
///
/// * centrality = degree / max degree, where degree counts distinct parents
///   plus distinct children
/// * impact = centrality × (1 − 0.5 × depth / (max depth + 1)) × 1.2 if direct,
///   clamped to `[0, 1]`
///
/// Both maxima are floored at 1, so a graph without edges scores 0 everywhere
/// instead of dividing by zero.
pub struct GraphScorer;

impl GraphScorer {
    pub fn score(graph: &mut DependencyGraph) {
        let max_degree = graph.nodes().iter().map(|n| n.degree()).max().unwrap_or(0).max(1) as f64;
        let max_depth = graph.max_depth().max(1) as f64;

        for node in graph.nodes_mut() {
            let centrality = node.degree() as f64 / max_degree;
            let depth_penalty = node.depth() as f64 / (max_depth + 1.0);
            let boost = if node.is_direct() { DIRECT_BOOST } else { 1.0 };
            let impact =
                (centrality * (1.0 - depth_penalty * DEPTH_WEIGHT) * boost).clamp(0.0, 1.0);
            node.set_scores(centrality, impact);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remediation::services::DependencyTreeParser;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scores_are_bounded() {
        let graph = DependencyTreeParser::parse(
            "\
g:root:1
├── g:a:1
│   ├── g:b:1
│   │   └── g:c:1
│   └── g:d:1
├── g:e:1
└── g:f:1
",
        );
        for node in graph.nodes() {
            assert!((0.0..=1.0).contains(&node.centrality_score()));
            assert!((0.0..=1.0).contains(&node.impact_score()));
        }
    }

    #[test]
    fn test_most_connected_node_has_full_centrality() {
        let graph = DependencyTreeParser::parse(
            "\
g:root:1
├── g:hub:1
│   ├── g:x:1
│   ├── g:y:1
│   └── g:z:1
└── g:leaf:1
",
        );
        // hub: 1 parent + 3 children = 4, root: 2 children
        let hub = graph.node("g:hub").unwrap();
        assert!(approx(hub.centrality_score(), 1.0));
        assert!(approx(graph.node("g:root").unwrap().centrality_score(), 0.5));
        assert!(approx(graph.node("g:x").unwrap().centrality_score(), 0.25));

        // direct at depth 1 of max depth 2: 1.0 × (1 − 0.5 × 1/3) × 1.2 = 1.0 after clamping
        assert!(approx(hub.impact_score(), 1.0));
        // transitive at depth 2: 0.25 × (1 − 0.5 × 2/3) = 0.1666..
        assert!(approx(graph.node("g:x").unwrap().impact_score(), 0.25 * (1.0 - 1.0 / 3.0)));
    }

    #[test]
    fn test_direct_boost_is_applied() {
        let graph = DependencyTreeParser::parse(
            "\
g:root:1
├── g:a:1
│   └── g:b:1
├── g:c:1
│   └── g:d:1
│   │   └── g:e:1
",
        );
        // max degree = 2 (root, a, c, d); max depth = 3 (e)
        let a = graph.node("g:a").unwrap();
        let d = graph.node("g:d").unwrap();
        assert!(approx(a.centrality_score(), d.centrality_score()));
        // 1.0 × 0.875 × 1.2 = 1.05, clamped
        assert!(approx(a.impact_score(), 1.0));
        // 1.0 × (1 − 0.5 × 2/4), no boost
        assert!(approx(d.impact_score(), 0.75));
        assert!(a.impact_score() > d.impact_score());
    }

    #[test]
    fn test_single_node_graph_scores_zero() {
        let graph = DependencyTreeParser::parse("g:root:1\n");
        let root = graph.node("g:root").unwrap();
        assert_eq!(root.centrality_score(), 0.0);
        assert_eq!(root.impact_score(), 0.0);
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut graph = DependencyGraph::new();
        GraphScorer::score(&mut graph);
        assert!(graph.is_empty());
    }
}
