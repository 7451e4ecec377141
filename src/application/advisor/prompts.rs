use crate::remediation::domain::version::sort_descending;
use crate::remediation::domain::{DependencyGraph, JFrogVulnerability};

/// Instructions that frame every advisor conversation
pub const SYSTEM_PROMPT: &str = r#"You are an expert Java/Spring dependency version analyzer.

YOUR ROLE:
You help developers choose the BEST fixed version for vulnerable dependencies.
You analyze dependency graphs, changelogs, and compatibility to make recommendations.

YOUR APPROACH - TOP-DOWN VERSION SELECTION:
1. Start with the HIGHEST fixed version
2. Check if it's compatible with the project
3. If yes → recommend it (newer = more fixes = better)
4. If no → explain why and try the next lower version
5. Continue until you find a compatible version

CHAIN OF THOUGHT REASONING:
You MUST think through each decision step by step. For each version:

STEP 1 - GRAPH ANALYSIS:
- Where is this dependency in the graph?
- What depends on it? (children)
- What does it depend on? (parents)
- Is it a direct or transitive dependency?
- What's the impact score?

STEP 2 - CHANGELOG ANALYSIS:
- Are there breaking changes?
- What APIs changed?
- Are there migration guides?
- What's the release date? (newer = potentially less tested)

STEP 3 - COMPATIBILITY CHECK:
- Does this version work with our Spring Boot version?
- Does it conflict with other dependencies?
- Are there Java version requirements?

STEP 4 - DECISION:
- IF compatible: Recommend this version
- IF not compatible: Explain why and try next lower version

OUTPUT FORMAT:
Always structure your response as JSON with these fields:
{
    "recommended_version": "X.Y.Z",
    "reasoning": "Step-by-step explanation of your decision...",
    "risk_level": "LOW|MEDIUM|HIGH",
    "breaking_changes": ["list", "of", "breaking", "changes"],
    "testing_recommendations": ["what", "to", "test"],
    "fallback_versions": ["alternative", "versions"]
}

IMPORTANT RULES:
1. NEVER recommend a version without checking the changelog
2. ALWAYS prefer the highest compatible version (top-down)
3. ALWAYS explain your reasoning step by step
4. If you can't determine compatibility, say so and suggest testing
5. Consider the impact score - high impact = more careful analysis needed
"#;

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Builds the opening user message for one vulnerability
pub fn build_context(vulnerability: &JFrogVulnerability, graph: &DependencyGraph) -> String {
    let fixed_versions = sort_descending(vulnerability.fixed_versions());
    let fixed_json =
        serde_json::to_string_pretty(&fixed_versions).unwrap_or_else(|_| "[]".to_string());

    let position = graph
        .get_dependency_info(vulnerability.ga())
        .and_then(|info| serde_json::to_string_pretty(&info).ok())
        .unwrap_or_else(|| "Not found in dependency graph".to_string());

    format!(
        r#"
VULNERABILITY ANALYSIS REQUEST
==============================

VULNERABLE DEPENDENCY:
- Group:Artifact: {ga}
- Current Version: {version}
- Severity: {severity}
- CVE: {cve}
- Description: {description}

AVAILABLE FIXED VERSIONS (sorted highest to lowest):
{fixed_json}

DEPENDENCY GRAPH POSITION:
{position}

PROJECT CONTEXT:
- Root Project: {root}
- Total Dependencies: {total}

YOUR TASK:
1. Analyze each fixed version starting from the HIGHEST
2. Use the tools to get changelog and compatibility info
3. Apply TOP-DOWN selection: pick the highest compatible version
4. Provide detailed reasoning for your choice
5. Return your recommendation in the specified JSON format

Remember: Think step by step. Check each version. Explain your reasoning.
"#,
        ga = vulnerability.ga(),
        version = vulnerability.version(),
        severity = vulnerability.severity(),
        cve = or_placeholder(vulnerability.cve_id(), "Not specified"),
        description = or_placeholder(vulnerability.description(), "Not provided"),
        root = graph.root_project().unwrap_or("(unknown)"),
        total = graph.len(),
    )
}
