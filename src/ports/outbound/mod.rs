/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod changelog_repository;
pub mod chat_model;
pub mod dependency_tree_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_report_reader;

pub use changelog_repository::ChangelogRepository;
pub use chat_model::{ChatMessage, ChatModel, ChatReply, Role, ToolCall, ToolDefinition};
pub use dependency_tree_reader::DependencyTreeReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_report_reader::ScanReportReader;
