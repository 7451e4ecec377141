use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::IsTerminal;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Stage messages and warnings are printed as lines; per-vulnerability
/// progress drives an indicatif bar. In verbose mode the bar is replaced by
/// one plain line per step, which reads better in CI logs.
pub struct StderrProgressReporter {
    verbose: bool,
    colored: bool,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            colored: std::io::stderr().is_terminal(),
            progress_bar: RefCell::new(None),
        }
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64).with_style(style);
        *slot = Some(pb.clone());
        pb
    }

    fn clear_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    /// Prints a line without tearing an active progress bar
    fn print_line(&self, line: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_line(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.verbose {
            eprintln!("   [{}/{}] {}", current, total, message.unwrap_or(""));
            return;
        }
        let pb = self.progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        let line = format!("⚠️  Warning: {}", message);
        if self.colored {
            self.print_line(&line.yellow().to_string());
        } else {
            self.print_line(&line);
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        if self.colored {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_lifecycle() {
        let reporter = StderrProgressReporter::new(false);
        reporter.report("Analyzing");
        reporter.report_progress(1, 3, Some("g:a"));
        assert!(reporter.progress_bar.borrow().is_some());
        reporter.report_warning("changelog not found");
        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_verbose_mode_does_not_create_bar() {
        let reporter = StderrProgressReporter::new(true);
        reporter.report_progress(1, 2, Some("g:a"));
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_error("boom");
    }

    #[test]
    fn test_default_is_not_verbose() {
        assert!(!StderrProgressReporter::default().verbose);
    }
}
