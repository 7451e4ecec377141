/// ProgressReporter port for user-facing diagnostics
///
/// Everything the tool says while it works (stage banners, per-vulnerability
/// progress, recoverable warnings) goes through this port so that stdout
/// stays reserved for the final report.
pub trait ProgressReporter {
    /// Reports a stage or informational message
    fn report(&self, message: &str);

    /// Reports progress through the vulnerability list
    ///
    /// # Arguments
    /// * `current` - Number of vulnerabilities analyzed so far
    /// * `total` - Number of vulnerabilities in the report
    /// * `message` - Optional label, usually the component being analyzed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem (failed fetch, unusable model reply)
    fn report_warning(&self, message: &str);

    /// Reports a failure the user must act on
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
