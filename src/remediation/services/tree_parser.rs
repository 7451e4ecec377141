use super::graph_scorer::GraphScorer;
use crate::remediation::domain::DependencyGraph;
use std::collections::BTreeMap;

/// Vertical continuation glyph; each one is one ancestor level
const VERTICAL: char = '│';

/// Branch glyphs marking the current level
const BRANCHES: [char; 2] = ['├', '└'];

/// Horizontal connector, ignored for depth
const HORIZONTAL: char = '─';

/// DependencyTreeParser turns box-drawn dependency tree text into a scored graph.
///
/// Input looks like the output of `mvn dependency:tree` rendered with Unicode
/// glyphs:
///
/// ```text
/// com.example:app:1.0.0
/// ├── org.springframework.boot:spring-boot-starter-tomcat:3.5.3
/// │   ├── org.apache.tomcat.embed:tomcat-embed-core:10.1.42
/// ```
///
/// Parsing never fails. Blank lines and lines without at least
/// `group:artifact:version` are skipped.
pub struct DependencyTreeParser;

impl DependencyTreeParser {
    /// Parses the tree and computes centrality and impact for every node
    pub fn parse(tree_text: &str) -> DependencyGraph {
        let mut graph = Self::build(tree_text);
        GraphScorer::score(&mut graph);
        graph
    }

    /// Builds nodes and edges without scoring them.
    ///
    /// The first depth-0 line names the root project. A later depth-0 line
    /// becomes a parentless node and anchors the lines below it, but does not
    /// replace the root.
    pub(crate) fn build(tree_text: &str) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        // most recent component seen at each depth
        let mut depth_parents: BTreeMap<usize, String> = BTreeMap::new();

        for line in tree_text.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let (prefix, content) = split_prefix(line);
            let Some((ga, version)) = extract_ga_version(content) else {
                continue;
            };
            let depth = depth_of(prefix);

            if depth == 0 && graph.root_project().is_none() {
                graph.set_root(&ga);
                graph.record_occurrence(&ga, &version, 0, true, None);
            } else {
                let parent = depth
                    .checked_sub(1)
                    .and_then(|d| depth_parents.get(&d))
                    .map(String::as_str);
                graph.record_occurrence(&ga, &version, depth, depth == 1, parent);
            }

            depth_parents.retain(|&d, _| d < depth);
            depth_parents.insert(depth, ga);
        }

        graph
    }
}

/// Splits a line into its leading glyph/whitespace run and the rest
fn split_prefix(line: &str) -> (&str, &str) {
    let content = line.trim_start_matches(|c: char| {
        c == VERTICAL || c == HORIZONTAL || BRANCHES.contains(&c) || c.is_whitespace()
    });
    (&line[..line.len() - content.len()], content)
}

/// Depth = number of vertical glyphs, plus one if a branch glyph is present
fn depth_of(prefix: &str) -> usize {
    let verticals = prefix.chars().filter(|&c| c == VERTICAL).count();
    let has_branch = prefix.contains(BRANCHES);
    verticals + usize::from(has_branch)
}

/// Extracts `(group:artifact, version)` from the text after the tree glyphs.
///
/// Parenthesised annotations such as `(omitted for conflict)` are removed.
/// Extra colon fields (packaging, classifier) are ignored and the last field
/// is taken as the version.
fn extract_ga_version(content: &str) -> Option<(String, String)> {
    let cleaned = strip_annotations(content);
    let parts: Vec<&str> = cleaned.trim().split(':').collect();
    if parts.len() < 3 {
        return None;
    }

    let (group, artifact) = (parts[0].trim(), parts[1].trim());
    let version = parts[parts.len() - 1].trim();
    if group.is_empty() || artifact.is_empty() || version.is_empty() {
        return None;
    }
    Some((format!("{}:{}", group, artifact), version.to_string()))
}

/// Removes every `( ... )` group together with the whitespace around it.
/// An unmatched `(` is kept as is.
fn strip_annotations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|i| open + i) else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = rest[close + 1..].trim_start();
    }
    out.push_str(rest);
    out
}
