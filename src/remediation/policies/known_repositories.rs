use std::collections::HashMap;

/// GitHub repositories publishing release notes for well-known components
const KNOWN_REPOSITORIES: [(&str, &str); 7] = [
    ("org.springframework:spring-core", "spring-projects/spring-framework"),
    ("org.springframework.boot:spring-boot", "spring-projects/spring-boot"),
    ("com.fasterxml.jackson.core:jackson-databind", "FasterXML/jackson-databind"),
    ("io.netty:netty-handler", "netty/netty"),
    ("org.hibernate.orm:hibernate-core", "hibernate/hibernate-orm"),
    ("org.apache.logging.log4j:log4j-core", "apache/logging-log4j2"),
    ("com.google.guava:guava", "google/guava"),
];

/// RepositoryTable resolves a component key to the `owner/repo` hosting its releases.
///
/// Resolution order:
/// 1. explicit entry (built-in or configured)
/// 2. group-id patterns for a few large projects
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryTable {
    repositories: HashMap<String, String>,
}

impl RepositoryTable {
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.repositories.extend(entries);
        self
    }

    pub fn resolve(&self, ga: &str) -> Option<String> {
        self.repositories
            .get(ga)
            .cloned()
            .or_else(|| Self::guess(ga))
    }

    /// Guesses the repository from the group id.
    /// Spring Boot is checked before the broader Spring Framework pattern.
    fn guess(ga: &str) -> Option<String> {
        let (group, _) = ga.split_once(':')?;

        if group.starts_with("org.springframework.boot") {
            return Some("spring-projects/spring-boot".to_string());
        }
        if group.starts_with("org.springframework") {
            return Some("spring-projects/spring-framework".to_string());
        }
        if let Some(project) = group.strip_prefix("com.google.") {
            if !project.is_empty() {
                return Some(format!("google/{}", project.replace('.', "-")));
            }
        }
        if group.starts_with("io.netty") {
            return Some("netty/netty".to_string());
        }
        None
    }
}

impl Default for RepositoryTable {
    fn default() -> Self {
        Self {
            repositories: KNOWN_REPOSITORIES
                .iter()
                .map(|(ga, repo)| (ga.to_string(), repo.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_entry() {
        let table = RepositoryTable::default();
        assert_eq!(
            table.resolve("com.fasterxml.jackson.core:jackson-databind").as_deref(),
            Some("FasterXML/jackson-databind")
        );
        assert_eq!(
            table.resolve("org.apache.logging.log4j:log4j-core").as_deref(),
            Some("apache/logging-log4j2")
        );
    }

    #[test]
    fn test_guessed_spring_boot_before_framework() {
        let table = RepositoryTable::default();
        assert_eq!(
            table
                .resolve("org.springframework.boot:spring-boot-starter-web")
                .as_deref(),
            Some("spring-projects/spring-boot")
        );
        assert_eq!(
            table.resolve("org.springframework:spring-webmvc").as_deref(),
            Some("spring-projects/spring-framework")
        );
    }

    #[test]
    fn test_guessed_google_project() {
        let table = RepositoryTable::default();
        assert_eq!(
            table.resolve("com.google.code.gson:gson").as_deref(),
            Some("google/code-gson")
        );
    }

    #[test]
    fn test_guessed_netty() {
        assert_eq!(
            RepositoryTable::default()
                .resolve("io.netty:netty-codec-http")
                .as_deref(),
            Some("netty/netty")
        );
    }

    #[test]
    fn test_unknown_component() {
        let table = RepositoryTable::default();
        assert_eq!(table.resolve("org.apache.tomcat.embed:tomcat-embed-core"), None);
        assert_eq!(table.resolve("no-colon"), None);
    }

    #[test]
    fn test_configured_entry_wins() {
        let table = RepositoryTable::default().with_entries(vec![(
            "org.apache.tomcat.embed:tomcat-embed-core".to_string(),
            "apache/tomcat".to_string(),
        )]);
        assert_eq!(
            table
                .resolve("org.apache.tomcat.embed:tomcat-embed-core")
                .as_deref(),
            Some("apache/tomcat")
        );
    }
}
