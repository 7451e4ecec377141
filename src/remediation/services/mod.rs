mod changelog_sections;
mod graph_scorer;
mod tree_parser;
mod upgrade_strategy_engine;

pub use changelog_sections::{ChangelogSectionExtractor, ChangelogSections};
pub use graph_scorer::GraphScorer;
pub use tree_parser::DependencyTreeParser;
pub use upgrade_strategy_engine::{ParentVersions, UpgradeStrategyEngine};
