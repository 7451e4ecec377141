/// Mock implementations for testing
mod mock_changelog_repository;
mod mock_chat_model;
mod mock_progress_reporter;
mod mock_readers;

pub use mock_changelog_repository::MockChangelogRepository;
pub use mock_chat_model::MockChatModel;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_readers::{MockScanReportReader, MockTreeReader};
