use crate::ports::outbound::ChangelogRepository;
use crate::remediation::domain::changelog::MAX_RAW_TEXT_CHARS;
use crate::remediation::domain::ChangelogEntry;
use crate::remediation::policies::RepositoryTable;
use crate::remediation::services::ChangelogSectionExtractor;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Release object returned by `GET /repos/{owner}/{repo}/releases/tags/{tag}`
#[derive(Debug, Default, Deserialize)]
struct GitHubRelease {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

/// Outcome of probing one release tag
enum TagLookup {
    Found(GitHubRelease),
    Missing,
}

/// GitHubChangelogClient adapter fetching release notes from GitHub Releases
///
/// The repository is resolved through a [`RepositoryTable`]. Since projects
/// tag releases differently, several tag spellings are tried in turn:
/// `v{V}`, `{V}`, `release-{V}` and `rel/{V}`.
///
/// A `404` moves on to the next spelling. Other failures are reported as a
/// warning and also move on, so one bad response never hides a later match.
pub struct GitHubChangelogClient {
    client: reqwest::Client,
    api_base_url: String,
    token: Option<String>,
    repositories: RepositoryTable,
    max_retries: u32,
}

impl GitHubChangelogClient {
    /// Creates a client for the public GitHub API
    ///
    /// # Arguments
    /// * `repositories` - Component key → `owner/repo` resolution table
    /// * `token` - Optional token; raises the API rate limit
    pub fn new(repositories: RepositoryTable, token: Option<String>) -> Result<Self> {
        let user_agent = format!("falcon-fix/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            repositories,
            max_retries: 3,
        })
    }

    /// Points the client at a GitHub Enterprise or test server
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn tag_candidates(version: &str) -> [String; 4] {
        [
            format!("v{}", version),
            version.to_string(),
            format!("release-{}", version),
            format!("rel/{}", version),
        ]
    }

    /// Rejects values that could escape the URL path segment they are placed in
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} cannot be empty", component_type);
        }
        if component.contains(['/', '\\']) {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }
        if component.contains("..") {
            anyhow::bail!("Security: {} contains '..' which is not allowed", component_type);
        }
        if component.contains(['#', '?', '@']) {
            anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
        }
        Ok(())
    }

    fn release_url(&self, owner_repo: &str, tag: &str) -> String {
        format!(
            "{}/repos/{}/releases/tags/{}",
            self.api_base_url,
            owner_repo,
            urlencoding::encode(tag)
        )
    }

    async fn send_with_retry(&self, url: &str) -> Result<reqwest::Response> {
        let mut attempt = 1;
        loop {
            let mut request = self
                .client
                .get(url)
                .header("Accept", "application/vnd.github+json");
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            match request.send().await {
                Ok(response) => return Ok(response),
                Err(e) if attempt >= self.max_retries => return Err(e.into()),
                Err(_) => {
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn lookup_tag(&self, owner_repo: &str, tag: &str) -> Result<TagLookup> {
        let url = self.release_url(owner_repo, tag);
        let response = self.send_with_retry(&url).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(TagLookup::Missing),
            status if status.is_success() => Ok(TagLookup::Found(response.json().await?)),
            status => anyhow::bail!("GitHub API returned status code {} for {}", status, url),
        }
    }
}

/// Converts a GitHub release into a categorized changelog entry
fn release_to_entry(release: GitHubRelease, version: &str) -> ChangelogEntry {
    let body = release.body.unwrap_or_default();
    let sections = ChangelogSectionExtractor::extract_all(&body);

    ChangelogEntry {
        version: version.to_string(),
        release_date: release
            .published_at
            .filter(|d| !d.is_empty())
            .map(|d| d.chars().take(10).collect()),
        summary: release
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Release {}", version)),
        breaking_changes: sections.breaking_changes,
        bug_fixes: sections.bug_fixes,
        new_features: sections.new_features,
        security_fixes: sections.security_fixes,
        raw_text: body.chars().take(MAX_RAW_TEXT_CHARS).collect(),
        source_url: release.html_url.unwrap_or_default(),
    }
}

#[async_trait]
impl ChangelogRepository for GitHubChangelogClient {
    async fn fetch_changelog(&self, ga: &str, version: &str) -> Result<Option<ChangelogEntry>> {
        Self::validate_url_component(version, "Version")?;

        let Some(owner_repo) = self.repositories.resolve(ga) else {
            return Ok(None);
        };

        for tag in Self::tag_candidates(version) {
            match self.lookup_tag(&owner_repo, &tag).await {
                Ok(TagLookup::Found(release)) => {
                    return Ok(Some(release_to_entry(release, version)));
                }
                Ok(TagLookup::Missing) => continue,
                Err(e) => eprintln!(
                    "⚠️  Warning: Failed to fetch release notes for {}:{}: {}",
                    ga, version, e
                ),
            }
        }

        Ok(None)
    }
}
