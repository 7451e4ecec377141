mod known_repositories;
mod override_properties;

pub use known_repositories::RepositoryTable;
pub use override_properties::OverridePropertyTable;
