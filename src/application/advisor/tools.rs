use crate::ports::outbound::{ChangelogRepository, ToolCall, ToolDefinition};
use crate::remediation::domain::DependencyGraph;
use serde::Deserialize;
use serde_json::{json, Value};

pub const GET_DEPENDENCY_INFO: &str = "get_dependency_info";
pub const GET_CHANGELOG: &str = "get_changelog";
pub const CHECK_VERSION_COMPATIBILITY: &str = "check_version_compatibility";

/// The three tools offered to the model
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_DEPENDENCY_INFO.to_string(),
            description: "Get detailed information about a dependency from the graph, including its position, impact score, and relationships.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "ga": {
                        "type": "string",
                        "description": "The group:artifact identifier (e.g., 'org.springframework:spring-core')"
                    }
                },
                "required": ["ga"]
            }),
        },
        ToolDefinition {
            name: GET_CHANGELOG.to_string(),
            description: "Fetch the changelog for a specific version of a dependency. Returns breaking changes, bug fixes, and security fixes.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "ga": {"type": "string", "description": "The group:artifact identifier"},
                    "version": {"type": "string", "description": "The version to get changelog for"}
                },
                "required": ["ga", "version"]
            }),
        },
        ToolDefinition {
            name: CHECK_VERSION_COMPATIBILITY.to_string(),
            description: "Check if a version is compatible with the current project based on dependency constraints.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "ga": {"type": "string", "description": "The group:artifact identifier"},
                    "version": {"type": "string", "description": "The version to check"}
                },
                "required": ["ga", "version"]
            }),
        },
    ]
}

#[derive(Deserialize)]
struct GaArgs {
    ga: String,
}

#[derive(Deserialize)]
struct GaVersionArgs {
    ga: String,
    version: String,
}

/// Answers tool calls against one graph snapshot and a changelog source.
///
/// Every call produces a JSON value, even on failure: the model sees an
/// `{"error": ...}` object instead of the conversation being aborted.
pub struct ToolExecutor<'a, R: ChangelogRepository> {
    graph: &'a DependencyGraph,
    changelogs: &'a R,
}

impl<'a, R: ChangelogRepository> ToolExecutor<'a, R> {
    pub fn new(graph: &'a DependencyGraph, changelogs: &'a R) -> Self {
        Self { graph, changelogs }
    }

    pub async fn execute(&self, call: &ToolCall) -> Value {
        match call.name.as_str() {
            GET_DEPENDENCY_INFO => match parse_args::<GaArgs>(call) {
                Ok(args) => self.dependency_info(&args.ga),
                Err(e) => e,
            },
            GET_CHANGELOG => match parse_args::<GaVersionArgs>(call) {
                Ok(args) => self.changelog(&args.ga, &args.version).await,
                Err(e) => e,
            },
            CHECK_VERSION_COMPATIBILITY => match parse_args::<GaVersionArgs>(call) {
                Ok(args) => self.compatibility(&args.ga, &args.version),
                Err(e) => e,
            },
            other => json!({ "error": format!("Unknown tool: {}", other) }),
        }
    }

    fn dependency_info(&self, ga: &str) -> Value {
        match self.graph.get_dependency_info(ga) {
            Some(info) => serde_json::to_value(info).unwrap_or(Value::Null),
            None => json!({ "error": format!("Dependency {} not found in graph", ga) }),
        }
    }

    async fn changelog(&self, ga: &str, version: &str) -> Value {
        match self.changelogs.fetch_changelog(ga, version).await {
            Ok(Some(entry)) => serde_json::to_value(entry.to_record()).unwrap_or(Value::Null),
            Ok(None) | Err(_) => json!({
                "version": version,
                "error": "Changelog not found",
                "note": "Could not fetch changelog. Consider checking manually."
            }),
        }
    }

    /// Structural check only: reports the parents that may constrain the
    /// version, never a definite yes.
    fn compatibility(&self, ga: &str, version: &str) -> Value {
        let Some(node) = self.graph.node(ga) else {
            return json!({
                "compatible": "unknown",
                "reason": "Dependency not in graph, cannot determine compatibility"
            });
        };

        let parents = node.parents();
        let mut notes = vec![
            format!("This dependency has {} parent(s)", parents.len()),
            "Recommend testing after upgrade".to_string(),
            "Check for any version constraints in parent POMs".to_string(),
        ];

        let mut result = json!({
            "ga": ga,
            "version": version,
            "compatible": "likely",
            "parents": parents,
        });

        let current = node.version();
        if !current.is_empty() {
            result["current_version"] = json!(current);
            notes.push(format!("Upgrading from {} to {}", current, version));
        }
        result["notes"] = json!(notes);
        result
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(call: &ToolCall) -> Result<T, Value> {
    serde_json::from_str(&call.arguments).map_err(|e| {
        json!({ "error": format!("Invalid arguments for {}: {}", call.name, e) })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remediation::domain::ChangelogEntry;
    use crate::remediation::services::DependencyTreeParser;
    use crate::shared::Result;
    use async_trait::async_trait;

    struct StaticChangelogs;

    #[async_trait]
    impl ChangelogRepository for StaticChangelogs {
        async fn fetch_changelog(
            &self,
            _ga: &str,
            version: &str,
        ) -> Result<Option<ChangelogEntry>> {
            match version {
                "2.0.0" => Ok(Some(ChangelogEntry {
                    version: version.to_string(),
                    summary: "Release 2.0.0".to_string(),
                    breaking_changes: vec!["Dropped Java 8".to_string()],
                    ..Default::default()
                })),
                "boom" => anyhow::bail!("network down"),
                _ => Ok(None),
            }
        }
    }

    fn graph() -> DependencyGraph {
        DependencyTreeParser::parse(
            "com.example:app:1.0\n├── g:starter:3.0\n│   └── g:core:1.0.0\n└── g:other:2.0\n",
        )
    }

    fn call(name: &str, arguments: &str) -> ToolCall {
        ToolCall {
            id: "call_1".to_string(),
            name: name.to_string(),
            arguments: arguments.to_string(),
        }
    }

    #[test]
    fn test_tool_definitions() {
        let names: Vec<String> = tool_definitions().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![GET_DEPENDENCY_INFO, GET_CHANGELOG, CHECK_VERSION_COMPATIBILITY]
        );
    }

    #[tokio::test]
    async fn test_get_dependency_info() {
        let graph = graph();
        let executor = ToolExecutor::new(&graph, &StaticChangelogs);

        let found = executor.execute(&call(GET_DEPENDENCY_INFO, r#"{"ga":"g:core"}"#)).await;
        assert_eq!(found["ga"], "g:core");
        assert_eq!(found["parents"], json!(["g:starter"]));
        assert!(found["risk_assessment"].is_string());

        let missing = executor.execute(&call(GET_DEPENDENCY_INFO, r#"{"ga":"x:y"}"#)).await;
        assert_eq!(missing["error"], "Dependency x:y not found in graph");
    }

    #[tokio::test]
    async fn test_get_changelog() {
        let graph = graph();
        let executor = ToolExecutor::new(&graph, &StaticChangelogs);

        let found = executor
            .execute(&call(GET_CHANGELOG, r#"{"ga":"g:core","version":"2.0.0"}"#))
            .await;
        assert_eq!(found["version"], "2.0.0");
        assert_eq!(found["has_breaking_changes"], true);

        for version in ["2.0.1", "boom"] {
            let args = format!(r#"{{"ga":"g:core","version":"{}"}}"#, version);
            let missing = executor.execute(&call(GET_CHANGELOG, &args)).await;
            assert_eq!(missing["version"], version);
            assert_eq!(missing["error"], "Changelog not found");
            assert_eq!(
                missing["note"],
                "Could not fetch changelog. Consider checking manually."
            );
        }
    }

    #[tokio::test]
    async fn test_check_version_compatibility() {
        let graph = graph();
        let executor = ToolExecutor::new(&graph, &StaticChangelogs);

        let result = executor
            .execute(&call(CHECK_VERSION_COMPATIBILITY, r#"{"ga":"g:core","version":"1.0.5"}"#))
            .await;
        assert_eq!(result["compatible"], "likely");
        assert_eq!(result["current_version"], "1.0.0");
        assert_eq!(result["parents"], json!(["g:starter"]));
        assert_eq!(
            result["notes"],
            json!([
                "This dependency has 1 parent(s)",
                "Recommend testing after upgrade",
                "Check for any version constraints in parent POMs",
                "Upgrading from 1.0.0 to 1.0.5"
            ])
        );

        let unknown = executor
            .execute(&call(CHECK_VERSION_COMPATIBILITY, r#"{"ga":"x:y","version":"1"}"#))
            .await;
        assert_eq!(unknown["compatible"], "unknown");
        assert_eq!(
            unknown["reason"],
            "Dependency not in graph, cannot determine compatibility"
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_and_bad_arguments() {
        let graph = graph();
        let executor = ToolExecutor::new(&graph, &StaticChangelogs);

        let unknown = executor.execute(&call("delete_everything", "{}")).await;
        assert_eq!(unknown["error"], "Unknown tool: delete_everything");

        let bad = executor.execute(&call(GET_CHANGELOG, r#"{"ga":"g:core"}"#)).await;
        assert!(bad["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid arguments for get_changelog"));
    }
}
