use crate::application::dto::AnalysisResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering the remediation report
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Renders a complete analysis
    ///
    /// # Arguments
    /// * `response` - Graph summary plus one analysis per vulnerability
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, response: &AnalysisResponse) -> Result<String>;
}
