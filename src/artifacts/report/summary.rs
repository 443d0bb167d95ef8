use crate::artifacts::diff::diff_entry::{DiffEntry, DiffKind};

const LABEL_WIDTH: usize = 11;

/// Per-kind tallies over a complete comparison result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub same: usize,
}

impl DiffSummary {
    pub fn tally(entries: &[DiffEntry]) -> Self {
        let mut summary = DiffSummary::default();

        for entry in entries {
            match entry.kind {
                DiffKind::Added => summary.added += 1,
                DiffKind::Deleted => summary.deleted += 1,
                DiffKind::Modified => summary.modified += 1,
                DiffKind::Same => summary.same += 1,
            }
        }

        summary
    }

    pub fn total(&self) -> usize {
        self.added + self.deleted + self.modified + self.same
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<width$}{}", "added:", self.added, width = LABEL_WIDTH)?;
        writeln!(f, "{:<width$}{}", "deleted:", self.deleted, width = LABEL_WIDTH)?;
        writeln!(f, "{:<width$}{}", "modified:", self.modified, width = LABEL_WIDTH)?;
        writeln!(f, "{:<width$}{}", "same:", self.same, width = LABEL_WIDTH)?;
        writeln!(f, "{:<width$}{}", "total:", self.total(), width = LABEL_WIDTH)
    }
}
