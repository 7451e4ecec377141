use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for the requested output format so the
/// entry point never names a concrete formatter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use falcon_fix::application::dto::OutputFormat;
    /// use falcon_fix::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON remediation report...",
            OutputFormat::Markdown => "📝 Generating Markdown remediation plan...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{AnalysisResponse, ReportMetadata};
    use crate::remediation::domain::DependencyGraph;

    fn empty_response() -> AnalysisResponse {
        AnalysisResponse::new(ReportMetadata::generate(), DependencyGraph::new(), Vec::new())
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&empty_response())
            .unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_markdown_formatter() {
        let output = FormatterFactory::create(OutputFormat::Markdown)
            .format(&empty_response())
            .unwrap();
        assert!(output.starts_with("# Dependency Remediation Plan"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON remediation report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown remediation plan..."
        );
    }
}
