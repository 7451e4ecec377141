/// Report formats the tool can render
///
/// Shared by the CLI, the config file and the formatter factory, so it lives
/// in the application layer rather than in any one adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Machine-readable remediation report (default)
    #[default]
    Json,
    /// Human-readable remediation plan
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_accepted_spellings() {
        for (input, expected) in [
            ("json", OutputFormat::Json),
            ("JSON", OutputFormat::Json),
            ("markdown", OutputFormat::Markdown),
            ("Md", OutputFormat::Markdown),
            (" md ", OutputFormat::Markdown),
        ] {
            assert_eq!(OutputFormat::from_str(input).unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let error = OutputFormat::from_str("xml").unwrap_err();
        assert!(error.contains("Invalid format: xml"));
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
