use super::prompts::{build_context, SYSTEM_PROMPT};
use super::tools::{tool_definitions, ToolExecutor};
use super::RecommendationService;
use crate::ports::outbound::{ChangelogRepository, ChatMessage, ChatModel, ToolDefinition};
use crate::remediation::domain::version_recommendation::{default_fallbacks, UNKNOWN_VERSION};
use crate::remediation::domain::{
    DependencyGraph, JFrogVulnerability, RiskLevel, VersionRecommendation,
};
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde::Deserialize;

/// Default cap on model rounds per vulnerability
pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 10;

/// Changelog requests in flight during the prefetch
const PREFETCH_CONCURRENCY: usize = 4;

const BUDGET_EXHAUSTED_REASONING: &str =
    "Analysis could not complete. Defaulting to highest fixed version.";

/// Final answer shape requested by the system prompt
#[derive(Debug, Deserialize)]
struct ModelAnswer {
    recommended_version: Option<String>,
    reasoning: Option<String>,
    risk_level: Option<String>,
    breaking_changes: Option<Vec<String>>,
    testing_recommendations: Option<Vec<String>>,
    fallback_versions: Option<Vec<String>>,
}

/// VersionAdvisor picks the best fixed version with a tool-calling model.
///
/// One conversation per vulnerability: the system prompt, a context message,
/// then up to `max_tool_rounds` model replies. A reply with tool calls is
/// answered with one tool message per call; a reply without tool calls is the
/// final answer. Running out of rounds yields the conservative fallback.
///
/// Changelogs for all fixed versions are requested up front so the model's
/// later `get_changelog` calls hit the cache; pair this advisor with a
/// caching [`ChangelogRepository`].
pub struct VersionAdvisor<C: ChatModel, R: ChangelogRepository> {
    chat_model: C,
    changelogs: R,
    tools: Vec<ToolDefinition>,
    max_tool_rounds: usize,
}

impl<C: ChatModel, R: ChangelogRepository> VersionAdvisor<C, R> {
    pub fn new(chat_model: C, changelogs: R) -> Self {
        Self {
            chat_model,
            changelogs,
            tools: tool_definitions(),
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }

    /// Sets the round budget; values below one are raised to one
    pub fn with_max_tool_rounds(mut self, max_tool_rounds: usize) -> Self {
        self.max_tool_rounds = max_tool_rounds.max(1);
        self
    }

    async fn prefetch_changelogs(&self, vulnerability: &JFrogVulnerability) {
        let ga = vulnerability.ga();
        let fetches: Vec<_> = vulnerability
            .fixed_versions()
            .iter()
            .map(|version| self.changelogs.fetch_changelog(ga, version))
            .collect();
        let _: Vec<_> = stream::iter(fetches)
            .buffer_unordered(PREFETCH_CONCURRENCY)
            .collect()
            .await;
    }

    /// Runs the bounded conversation for one vulnerability
    pub async fn analyze(
        &self,
        vulnerability: &JFrogVulnerability,
        graph: &DependencyGraph,
    ) -> Result<VersionRecommendation> {
        self.prefetch_changelogs(vulnerability).await;

        let executor = ToolExecutor::new(graph, &self.changelogs);
        let mut messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_context(vulnerability, graph)),
        ];

        for _ in 0..self.max_tool_rounds {
            let reply = self.chat_model.complete(&messages, &self.tools).await?;

            if reply.tool_calls.is_empty() {
                let content = reply.content.unwrap_or_default();
                return Ok(parse_response(&content, vulnerability));
            }

            let mut results = Vec::with_capacity(reply.tool_calls.len());
            for call in &reply.tool_calls {
                let output = executor.execute(call).await;
                results.push(ChatMessage::tool_result(&call.id, output.to_string()));
            }

            messages.push(ChatMessage::assistant(reply.content, reply.tool_calls));
            messages.extend(results);
        }

        Ok(VersionRecommendation::unavailable(
            vulnerability,
            BUDGET_EXHAUSTED_REASONING,
        ))
    }
}

#[async_trait]
impl<C: ChatModel, R: ChangelogRepository> RecommendationService for VersionAdvisor<C, R> {
    async fn recommend(
        &self,
        vulnerability: &JFrogVulnerability,
        graph: &DependencyGraph,
    ) -> Result<VersionRecommendation> {
        self.analyze(vulnerability, graph).await
    }
}

/// Returns the JSON payload of a reply, unwrapping a Markdown code fence.
fn extract_json(content: &str) -> &str {
    let after_fence = content
        .split_once("```json")
        .or_else(|| content.split_once("```"))
        .map(|(_, rest)| rest);

    match after_fence {
        Some(rest) => rest.split_once("```").map_or(rest, |(body, _)| body),
        None => content,
    }
}

/// Converts the model's final answer into a recommendation.
///
/// Missing fields fall back to the scanner's data; a reply that is not a
/// JSON object is kept verbatim as reasoning.
pub fn parse_response(content: &str, vulnerability: &JFrogVulnerability) -> VersionRecommendation {
    let Ok(answer) = serde_json::from_str::<ModelAnswer>(extract_json(content).trim()) else {
        return VersionRecommendation::unparsed(vulnerability, content);
    };

    VersionRecommendation {
        ga: vulnerability.ga().to_string(),
        current_version: vulnerability.version().to_string(),
        recommended_version: answer.recommended_version.unwrap_or_else(|| {
            vulnerability
                .preferred_fix()
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
        }),
        reasoning: answer
            .reasoning
            .unwrap_or_else(|| "No reasoning provided".to_string()),
        risk_level: answer
            .risk_level
            .as_deref()
            .and_then(RiskLevel::parse_lenient)
            .unwrap_or(RiskLevel::Medium),
        breaking_changes: answer.breaking_changes.unwrap_or_default(),
        testing_recommendations: answer.testing_recommendations.unwrap_or_default(),
        fallback_versions: answer
            .fallback_versions
            .unwrap_or_else(|| default_fallbacks(vulnerability)),
    }
}
