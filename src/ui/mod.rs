//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while bundles are copied
//! - Status output and outcome accounting ([`report`])
//! - Prompting for answers ([`input`])
//!
//! All progress reporting goes through the ProgressReporter trait, so the copy
//! loop does not care whether a terminal is attached.

pub mod input;
pub mod report;

use std::io::IsTerminal;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

pub use input::{InputProvider, TerminalInput};
pub use report::{Action, Outcome, Reporter};

/// Progress reporter trait for long-running operations
pub trait ProgressReporter {
    /// Initialize file progress with total file count
    fn init_file_progress(&mut self, total_files: u64);

    /// Update to show current bundle being processed
    fn update_bundle(&mut self, bundle_name: &str, current: usize, total: usize);

    /// Increment bundle progress
    fn inc_bundle(&mut self);

    /// Update file progress
    fn update_file(&mut self, file_path: &str);

    /// Run `f` with the bars hidden, so lines printed by `f` do not tear them
    fn suspend(&self, f: &mut dyn FnMut());

    /// Finish all progress bars
    fn finish(&mut self);
}

/// Picks the interactive reporter when stdout is a terminal
pub fn progress_for(total_bundles: usize, verbose: bool) -> Box<dyn ProgressReporter> {
    if std::io::stdout().is_terminal() && !verbose {
        Box::new(InteractiveProgressReporter::new(total_bundles as u64))
    } else {
        Box::new(SilentProgressReporter)
    }
}

fn bar_style(template: &str, chars: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(chars)
}

/// Interactive progress reporter with visual progress bars
pub struct InteractiveProgressReporter {
    bars: MultiProgress,
    /// Main progress bar for bundles
    bundle_pb: ProgressBar,
    /// File progress bar for the bundle being copied
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new(total_bundles: u64) -> Self {
        let bars = MultiProgress::new();
        let bundle_pb = bars.add(ProgressBar::new(total_bundles));
        bundle_pb.set_style(bar_style("[{bar:40.cyan/blue}] {pos}/{len} {msg}", "#>-"));

        Self {
            bars,
            bundle_pb,
            file_pb: None,
        }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn init_file_progress(&mut self, total_files: u64) {
        if let Some(old) = self.file_pb.take() {
            old.finish_and_clear();
            self.bars.remove(&old);
        }
        let file_pb = self.bars.add(ProgressBar::new(total_files));
        file_pb.set_style(bar_style(
            "  [{bar:40.green/yellow}] {pos}/{len} files {msg}",
            "█▉▊▋▌▍▎▏  ",
        ));
        self.file_pb = Some(file_pb);
    }

    fn update_bundle(&mut self, bundle_name: &str, current: usize, total: usize) {
        self.bundle_pb
            .set_message(format!("({current}/{total}) {bundle_name}"));
    }

    fn inc_bundle(&mut self) {
        self.bundle_pb.inc(1);
    }

    fn update_file(&mut self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            // Truncate long paths for display
            let display_path = if file_path.chars().count() > 50 {
                let tail: String = file_path
                    .chars()
                    .rev()
                    .take(47)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("...{tail}")
            } else {
                file_path.to_string()
            };
            file_pb.set_message(display_path);
            file_pb.inc(1);
        }
    }

    fn suspend(&self, f: &mut dyn FnMut()) {
        self.bars.suspend(f);
    }

    fn finish(&mut self) {
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.finish_and_clear();
        }
        self.bundle_pb.finish_and_clear();
    }
}

/// No-op reporter used when output is not a terminal
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn init_file_progress(&mut self, _total_files: u64) {}

    fn update_bundle(&mut self, _bundle_name: &str, _current: usize, _total: usize) {}

    fn inc_bundle(&mut self) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn suspend(&self, f: &mut dyn FnMut()) {
        f();
    }

    fn finish(&mut self) {}
}
