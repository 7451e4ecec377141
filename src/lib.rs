//! falcon-fix - remediation planning for vulnerable Maven dependencies
//!
//! Parses `mvn dependency:tree` output into a scored dependency graph, takes
//! the findings of a vulnerability scanner, and for each finding recommends a
//! target version and the safest way to reach it (direct upgrade, parent
//! upgrade, BOM property override, forced override, or none).
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`remediation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use case, version advisor and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use falcon_fix::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let use_case = AnalyzeVulnerabilitiesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     OfflineAdvisor::new(),
//!     StderrProgressReporter::new(false),
//!     OverridePropertyTable::spring_boot(),
//! );
//!
//! let request = AnalysisRequest::new(
//!     TreeInput::File("dependency-tree.txt".into()),
//!     ScanInput::File("scan.json".into()),
//!     ParentVersions::new(),
//! );
//! let response = use_case.execute(request).await?;
//!
//! let output = MarkdownFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod remediation;
pub mod samples;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        CachingChangelogRepository, GitHubChangelogClient, OpenAiChatClient,
    };
    pub use crate::application::advisor::{OfflineAdvisor, RecommendationService, VersionAdvisor};
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, OutputFormat, ScanInput, TreeInput,
        VulnerabilityAnalysis,
    };
    pub use crate::application::use_cases::AnalyzeVulnerabilitiesUseCase;
    pub use crate::ports::outbound::{
        ChangelogRepository, ChatModel, DependencyTreeReader, OutputPresenter, ProgressReporter,
        ReportFormatter, ScanReportReader,
    };
    pub use crate::remediation::domain::{
        ChangelogEntry, DependencyGraph, DependencyNode, JFrogVulnerability, RiskLevel,
        UpgradeRecommendation, UpgradeStrategy, VersionRecommendation,
    };
    pub use crate::remediation::policies::{OverridePropertyTable, RepositoryTable};
    pub use crate::remediation::services::{
        DependencyTreeParser, ParentVersions, UpgradeStrategyEngine,
    };
    pub use crate::shared::Result;
}
