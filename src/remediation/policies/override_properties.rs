use std::collections::HashMap;

/// Spring Boot BOM version properties for components commonly pulled in transitively
const SPRING_BOOT_PROPERTIES: [(&str, &str); 17] = [
    ("org.apache.tomcat.embed:tomcat-embed-core", "tomcat.version"),
    ("org.apache.tomcat.embed:tomcat-embed-el", "tomcat.version"),
    ("org.apache.tomcat.embed:tomcat-embed-websocket", "tomcat.version"),
    ("com.fasterxml.jackson.core:jackson-databind", "jackson-bom.version"),
    ("com.fasterxml.jackson.core:jackson-core", "jackson-bom.version"),
    ("com.fasterxml.jackson.core:jackson-annotations", "jackson-bom.version"),
    ("org.apache.logging.log4j:log4j-core", "log4j2.version"),
    ("org.apache.logging.log4j:log4j-api", "log4j2.version"),
    ("io.netty:netty-handler", "netty.version"),
    ("io.netty:netty-buffer", "netty.version"),
    ("io.netty:netty-transport", "netty.version"),
    ("org.hibernate.orm:hibernate-core", "hibernate.version"),
    ("org.springframework:spring-core", "spring-framework.version"),
    ("org.springframework:spring-context", "spring-framework.version"),
    ("org.springframework:spring-web", "spring-framework.version"),
    ("ch.qos.logback:logback-classic", "logback.version"),
    ("ch.qos.logback:logback-core", "logback.version"),
];

/// OverridePropertyTable maps a component key to the build property that
/// controls its managed version.
///
/// A component found here can be upgraded by setting one property instead of
/// pinning the artifact, which keeps sibling modules on the same version.
/// The table starts from the Spring Boot defaults and can be extended from
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OverridePropertyTable {
    properties: HashMap<String, String>,
}

impl OverridePropertyTable {
    /// Table with the Spring Boot BOM defaults
    pub fn spring_boot() -> Self {
        Self {
            properties: SPRING_BOOT_PROPERTIES
                .iter()
                .map(|(ga, prop)| (ga.to_string(), prop.to_string()))
                .collect(),
        }
    }

    /// Table with no entries at all
    pub fn empty() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    /// Adds or replaces entries; later entries win
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.properties.extend(entries);
        self
    }

    pub fn property_for(&self, ga: &str) -> Option<&str> {
        self.properties.get(ga).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for OverridePropertyTable {
    fn default() -> Self {
        Self::spring_boot()
    }
}
