use super::dependency_node::split_component_key;
use super::version::sort_descending;
use crate::shared::Result;
use serde::Serialize;

/// Maximum length of a component key or version accepted from a scan report
const MAX_FIELD_LENGTH: usize = 512;

/// One finding from a vulnerability scanner, keyed to a component.
///
/// Fix versions are kept in the order the scanner reported them; the highest
/// one is treated as the preferred target when no advisor is consulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JFrogVulnerability {
    ga: String,
    version: String,
    fixed_versions: Vec<String>,
    cve_id: String,
    severity: String,
    description: String,
}

impl JFrogVulnerability {
    /// Creates a validated vulnerability record.
    ///
    /// # Errors
    /// Returns an error if `ga` is not a `group:artifact` key or if the
    /// component key or version is empty or unreasonably long.
    pub fn new(
        ga: String,
        version: String,
        fixed_versions: Vec<String>,
        cve_id: String,
        severity: String,
        description: String,
    ) -> Result<Self> {
        if split_component_key(&ga).is_none() {
            anyhow::bail!(
                "Invalid component key '{}': expected the form group:artifact",
                ga
            );
        }
        if version.trim().is_empty() {
            anyhow::bail!("Vulnerable version for {} cannot be empty", ga);
        }
        if ga.len() > MAX_FIELD_LENGTH || version.len() > MAX_FIELD_LENGTH {
            anyhow::bail!(
                "Component key or version for {} exceeds {} bytes",
                ga,
                MAX_FIELD_LENGTH
            );
        }

        let fixed_versions = fixed_versions
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        Ok(Self {
            ga,
            version,
            fixed_versions,
            cve_id,
            severity,
            description,
        })
    }

    pub fn ga(&self) -> &str {
        &self.ga
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn fixed_versions(&self) -> &[String] {
        &self.fixed_versions
    }

    pub fn cve_id(&self) -> &str {
        &self.cve_id
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reported fix versions, highest first
    pub fn fixes_highest_first(&self) -> Vec<String> {
        sort_descending(&self.fixed_versions)
    }

    /// Highest reported fix version, if the scanner knows of any
    pub fn preferred_fix(&self) -> Option<String> {
        self.fixes_highest_first().into_iter().next()
    }
}
