use crate::areas::comparison::Comparison;
use crate::artifacts::diff::diff_entry::DiffFilter;
use crate::artifacts::diff::tree_diff::{DiffReport, TreeDiff};
use crate::artifacts::report::summary::DiffSummary;
use colored::Colorize;
use std::io::Write;

const RULE_WIDTH: usize = 60;

impl Comparison {
    pub fn run(&self, filter: DiffFilter) -> anyhow::Result<()> {
        let report = TreeDiff::new(self.left(), self.right()).run();

        self.print_report(&report, filter)?;
        self.print_warnings(&report)?;

        Ok(())
    }

    fn print_report(&self, report: &DiffReport, filter: DiffFilter) -> anyhow::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(self.writer(), "left:  {}", self.left().root().display())?;
        writeln!(self.writer(), "right: {}", self.right().root().display())?;
        writeln!(self.writer(), "{}", rule)?;

        let mut displayed = 0usize;
        for entry in &report.entries {
            if filter.matches(entry.kind) {
                writeln!(self.writer(), "{}{}", entry.kind, entry.relative_path)?;
                displayed += 1;
            }
        }

        writeln!(self.writer(), "{}", rule)?;

        // tallies always cover the full result, filtered or not
        let summary = DiffSummary::tally(&report.entries);
        write!(self.writer(), "{}", summary)?;

        if filter != DiffFilter::all() {
            writeln!(self.writer(), "displayed: {}", displayed)?;
        }

        Ok(())
    }

    fn print_warnings(&self, report: &DiffReport) -> anyhow::Result<()> {
        for warning in &report.warnings {
            writeln!(
                self.err_writer(),
                "{} {}: {}",
                "warning:".yellow(),
                warning.relative_path,
                warning.cause
            )?;
        }

        Ok(())
    }
}
