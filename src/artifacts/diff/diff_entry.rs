use bitflags::bitflags;
use colored::Colorize;
use derive_new::new;
use std::path::PathBuf;

/// Classification of one path relative to the left tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Added,
    Deleted,
    Modified,
    Same,
}

impl DiffKind {
    pub fn status_char(&self) -> char {
        match self {
            DiffKind::Added => 'A',
            DiffKind::Deleted => 'D',
            DiffKind::Modified => 'M',
            DiffKind::Same => 'S',
        }
    }
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // labels are padded before coloring so escape codes do not skew
        // the column width
        let label = match self {
            DiffKind::Added => "[added]    ".green(),
            DiffKind::Deleted => "[deleted]  ".red(),
            DiffKind::Modified => "[modified] ".yellow(),
            DiffKind::Same => "[same]     ".normal(),
        };
        write!(f, "{}", label)
    }
}

/// One classified path of the comparison result.
///
/// `relative_path` is shared vocabulary between both trees (`/` separated,
/// no leading separator). `location` points at the instance that produced
/// the entry: the right tree for added entries, the left tree otherwise.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffEntry {
    pub relative_path: String,
    pub location: PathBuf,
    pub kind: DiffKind,
}

/// Project the entries of one kind, preserving their order.
pub fn filter_by_kind(entries: &[DiffEntry], kind: DiffKind) -> Vec<DiffEntry> {
    entries
        .iter()
        .filter(|entry| entry.kind == kind)
        .cloned()
        .collect::<Vec<_>>()
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const DELETED = 0b0010;
        const MODIFIED = 0b0100;
        const SAME = 0b1000;
    }
}

impl DiffFilter {
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'D' => filter |= Self::DELETED,
                'M' => filter |= Self::MODIFIED,
                'S' => filter |= Self::SAME,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, kind: DiffKind) -> bool {
        match kind {
            DiffKind::Added => self.contains(Self::ADDED),
            DiffKind::Deleted => self.contains(Self::DELETED),
            DiffKind::Modified => self.contains(Self::MODIFIED),
            DiffKind::Same => self.contains(Self::SAME),
        }
    }
}
