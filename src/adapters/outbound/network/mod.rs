/// Network adapters for external API calls
mod caching_changelog_repository;
mod github_changelog_client;
mod openai_chat_client;

pub use caching_changelog_repository::CachingChangelogRepository;
pub use github_changelog_client::GitHubChangelogClient;
pub use openai_chat_client::{OpenAiChatClient, DEFAULT_API_BASE_URL, DEFAULT_MODEL};
