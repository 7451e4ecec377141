/// Maximum number of items collected per section
const MAX_SECTION_ITEMS: usize = 10;

pub const BREAKING_KEYWORDS: [&str; 3] = ["breaking", "incompatible", "migration"];
pub const BUG_FIX_KEYWORDS: [&str; 3] = ["bug", "fix", "patch"];
pub const FEATURE_KEYWORDS: [&str; 3] = ["feature", "enhancement", "improvement"];
pub const SECURITY_KEYWORDS: [&str; 3] = ["security", "cve", "vulnerability"];

/// Release-note bullet lists grouped by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangelogSections {
    pub breaking_changes: Vec<String>,
    pub bug_fixes: Vec<String>,
    pub new_features: Vec<String>,
    pub security_fixes: Vec<String>,
}

/// ChangelogSectionExtractor pulls categorized bullet items out of
/// Markdown release notes.
///
/// A line starting with `#` opens a section; the section is relevant when the
/// header text contains any of the keywords (case-insensitive). Bullet lines
/// (`-`, `*`, `•`) inside a relevant section are collected.
pub struct ChangelogSectionExtractor;

impl ChangelogSectionExtractor {
    pub fn extract_all(body: &str) -> ChangelogSections {
        ChangelogSections {
            breaking_changes: Self::extract(body, &BREAKING_KEYWORDS),
            bug_fixes: Self::extract(body, &BUG_FIX_KEYWORDS),
            new_features: Self::extract(body, &FEATURE_KEYWORDS),
            security_fixes: Self::extract(body, &SECURITY_KEYWORDS),
        }
    }

    /// Collects at most ten bullet items from sections whose header mentions a keyword
    pub fn extract(body: &str, keywords: &[&str]) -> Vec<String> {
        let mut in_section = false;
        let mut items = Vec::new();

        for line in body.lines() {
            if line.starts_with('#') {
                let header = line.to_lowercase();
                in_section = keywords.iter().any(|kw| header.contains(kw));
                continue;
            }
            if !in_section {
                continue;
            }
            if let Some(item) = bullet_text(line) {
                items.push(item.to_string());
                if items.len() == MAX_SECTION_ITEMS {
                    break;
                }
            }
        }

        items
    }
}

/// Text of a bullet line, or `None` when the line is not a non-empty bullet
fn bullet_text(line: &str) -> Option<&str> {
    let rest = line
        .trim_start()
        .strip_prefix(['-', '*', '•'])?
        .trim();
    (!rest.is_empty()).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "\
## Breaking Changes
- Removed deprecated `Foo#bar`
* Minimum Java version is now 17

## Bug Fixes
- Fix NPE in handler
- Fix timeout issue
Some paragraph that is not a bullet

## New Features
• Added HTTP/3 support

## Security
- CVE-2024-1234: request smuggling
";

    #[test]
    fn test_extract_all_categories() {
        let sections = ChangelogSectionExtractor::extract_all(NOTES);
        assert_eq!(
            sections.breaking_changes,
            vec!["Removed deprecated `Foo#bar`", "Minimum Java version is now 17"]
        );
        assert_eq!(sections.bug_fixes, vec!["Fix NPE in handler", "Fix timeout issue"]);
        assert_eq!(sections.new_features, vec!["Added HTTP/3 support"]);
        assert_eq!(sections.security_fixes, vec!["CVE-2024-1234: request smuggling"]);
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let items = ChangelogSectionExtractor::extract(
            "### MIGRATION NOTES\n- Rename config\n",
            &BREAKING_KEYWORDS,
        );
        assert_eq!(items, vec!["Rename config"]);
    }

    #[test]
    fn test_bullets_outside_sections_are_ignored() {
        let items = ChangelogSectionExtractor::extract(
            "- Fix something\n## Other\n- Fix more\n",
            &BUG_FIX_KEYWORDS,
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_items_are_capped() {
        let mut body = String::from("## Bug fixes\n");
        for i in 0..25 {
            body.push_str(&format!("- fix {}\n", i));
        }
        let items = ChangelogSectionExtractor::extract(&body, &BUG_FIX_KEYWORDS);
        assert_eq!(items.len(), 10);
        assert_eq!(items[9], "fix 9");
    }

    #[test]
    fn test_indented_bullets_and_empty_bullets() {
        let items = ChangelogSectionExtractor::extract(
            "## Security\n   - nested item\n-\n-   \n",
            &SECURITY_KEYWORDS,
        );
        assert_eq!(items, vec!["nested item"]);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(ChangelogSectionExtractor::extract_all(""), ChangelogSections::default());
    }
}
