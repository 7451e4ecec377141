use serde::Serialize;

/// Maximum number of characters of release notes kept in [`ChangelogEntry::raw_text`]
pub const MAX_RAW_TEXT_CHARS: usize = 5000;

/// Release notes for one version of a component, split into categories
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangelogEntry {
    pub version: String,
    pub release_date: Option<String>,
    pub summary: String,
    pub breaking_changes: Vec<String>,
    pub bug_fixes: Vec<String>,
    pub new_features: Vec<String>,
    pub security_fixes: Vec<String>,
    pub raw_text: String,
    pub source_url: String,
}

impl ChangelogEntry {
    pub fn has_breaking_changes(&self) -> bool {
        !self.breaking_changes.is_empty()
    }

    /// One-line digest of the categories that have entries
    pub fn risk_summary(&self) -> String {
        let mut risks = Vec::new();
        if !self.breaking_changes.is_empty() {
            risks.push(format!(
                "⚠️ {} BREAKING CHANGE(S)",
                self.breaking_changes.len()
            ));
        }
        if !self.security_fixes.is_empty() {
            risks.push(format!("🔒 {} security fix(es)", self.security_fixes.len()));
        }
        if !self.bug_fixes.is_empty() {
            risks.push(format!("🐛 {} bug fix(es)", self.bug_fixes.len()));
        }
        if !self.new_features.is_empty() {
            risks.push(format!("✨ {} new feature(s)", self.new_features.len()));
        }

        if risks.is_empty() {
            "No significant changes detected".to_string()
        } else {
            risks.join(" | ")
        }
    }

    /// Structured view handed to the version advisor (raw text omitted)
    pub fn to_record(&self) -> ChangelogRecord {
        ChangelogRecord {
            version: self.version.clone(),
            release_date: self.release_date.clone(),
            summary: self.summary.clone(),
            breaking_changes: self.breaking_changes.clone(),
            bug_fixes: self.bug_fixes.clone(),
            new_features: self.new_features.clone(),
            security_fixes: self.security_fixes.clone(),
            has_breaking_changes: self.has_breaking_changes(),
            risk_summary: self.risk_summary(),
            source_url: self.source_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangelogRecord {
    pub version: String,
    pub release_date: Option<String>,
    pub summary: String,
    pub breaking_changes: Vec<String>,
    pub bug_fixes: Vec<String>,
    pub new_features: Vec<String>,
    pub security_fixes: Vec<String>,
    pub has_breaking_changes: bool,
    pub risk_summary: String,
    pub source_url: String,
}
