//! UI/Progress presentation layer
//!
//! This module handles:
//! - Reporting import progress through the [`ImportReporter`] trait
//! - An indicatif spinner plus styled output for interactive runs
//! - Silent reporting for `--quiet` and tests
//!
//! The import operation only talks to the trait, so the command layer picks
//! the implementation based on command-line flags.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::{CopiedFile, CopyOutcome, ImportRequest, ImportResult, PatchOutcome, PatchReport};

/// Printed once an import has completed every step
pub const SUCCESS_MESSAGE: &str = "The section has been imported from the selected project.";

/// Receives progress events from an import
pub trait ImportReporter: Send + Sync {
    /// Called once, before the request is validated
    fn import_started(&mut self, request: &ImportRequest);

    /// Called after each located file was placed into the target
    fn resource_copied(&mut self, copied: &CopiedFile);

    /// Called after each aggregator patch completed
    fn patch_applied(&mut self, report: &PatchReport);

    /// Called once with the final result, successful or not
    fn import_finished(&mut self, result: &ImportResult);
}

/// One-line description of a copy
pub fn describe_copy(copied: &CopiedFile) -> String {
    let verb = match copied.outcome {
        CopyOutcome::Copied => "copied",
        CopyOutcome::Unchanged => "unchanged",
    };
    format!("{} {}: {}", verb, copied.kind, copied.destination.display())
}

/// One-line description of a patch
pub fn describe_patch(report: &PatchReport) -> String {
    let verb = match report.outcome {
        PatchOutcome::Applied => "updated",
        PatchOutcome::AlreadyPresent => "already registered",
    };
    format!("{} {}: {}", verb, report.step, report.path.display())
}

fn create_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Interactive reporter with a spinner and styled summary lines
///
/// Verbose lines go to stderr; the success message goes to stdout.
pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            spinner: None,
            verbose,
        }
    }

    /// Print a detail line without tearing the spinner
    fn detail(&self, line: String) {
        if !self.verbose {
            return;
        }
        let line = format!("  {}", Style::new().dim().apply_to(line));
        match &self.spinner {
            Some(pb) => pb.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl ImportReporter for ConsoleReporter {
    fn import_started(&mut self, request: &ImportRequest) {
        self.spinner = Some(create_spinner(format!(
            "Importing section '{}'...",
            request.name
        )));
        self.detail(format!(
            "importing '{}' from {} into {}",
            request.name,
            request.source_root.display(),
            request.target_root.display()
        ));
    }

    fn resource_copied(&mut self, copied: &CopiedFile) {
        self.detail(describe_copy(copied));
    }

    fn patch_applied(&mut self, report: &PatchReport) {
        self.detail(describe_patch(report));
    }

    fn import_finished(&mut self, result: &ImportResult) {
        self.clear_spinner();

        if result.is_success() {
            println!("{}", Style::new().green().apply_to(SUCCESS_MESSAGE));
        } else if let Some(failure) = &result.failure {
            eprintln!(
                "{} {}",
                Style::new().red().bold().apply_to("Import stopped during"),
                failure.stage
            );
        }
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.abandon();
        }
    }
}

/// Silent reporter for `--quiet`
///
/// No-op implementation that does not display anything.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl ImportReporter for SilentReporter {
    fn import_started(&mut self, _request: &ImportRequest) {}

    fn resource_copied(&mut self, _copied: &CopiedFile) {}

    fn patch_applied(&mut self, _report: &PatchReport) {}

    fn import_finished(&mut self, _result: &ImportResult) {}
}
