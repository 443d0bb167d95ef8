use crate::areas::workspace::{TreeEntry, Workspace, join_rel};
use crate::artifacts::diff::diff_entry::{DiffEntry, DiffKind};
use crate::artifacts::diff::inspector::Inspector;
use derive_new::new;

/// A traversal failure that was absorbed into a conservative
/// classification instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TraversalWarning {
    pub relative_path: String,
    pub cause: String,
}

/// The complete outcome of one comparison run, handed off to the
/// rendering layer. Rebuilt from empty on every run.
#[derive(Debug, Default)]
pub struct DiffReport {
    pub entries: Vec<DiffEntry>,
    pub warnings: Vec<TraversalWarning>,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Recursive lock-step comparison of two directory trees.
///
/// Children are paired by name per level: unpaired left entries are
/// deleted subtrees, unpaired right entries are added subtrees, paired
/// directories recurse, paired files go to the [`Inspector`]. A path that
/// is a file on one side and a directory on the other is treated as if it
/// did not exist in the other tree at all: the left entity is enumerated
/// as deleted and the right entity as added, both rooted at the same
/// relative path.
///
/// Per-entry failures never abort the walk. An unlistable directory
/// contributes zero children, an unreadable file pair is conservatively
/// classified modified; both leave a [`TraversalWarning`] behind.
pub struct TreeDiff<'w> {
    left: &'w dyn Workspace,
    right: &'w dyn Workspace,
    entries: Vec<DiffEntry>,
    warnings: Vec<TraversalWarning>,
}

impl<'w> TreeDiff<'w> {
    pub fn new(left: &'w dyn Workspace, right: &'w dyn Workspace) -> Self {
        TreeDiff {
            left,
            right,
            entries: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn run(mut self) -> DiffReport {
        self.compare_level("");

        DiffReport {
            entries: self.entries,
            warnings: self.warnings,
        }
    }

    fn workspace(&self, side: Side) -> &'w dyn Workspace {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn compare_level(&mut self, prefix: &str) {
        let lhs = self.children_of(Side::Left, prefix);
        let rhs = self.children_of(Side::Right, prefix);

        // each name pairs at most once per side per level
        let mut rhs_matched = vec![false; rhs.len()];

        for entry in &lhs {
            let path = join_rel(prefix, &entry.name);

            let paired = rhs
                .iter()
                .enumerate()
                .find(|(i, other)| !rhs_matched[*i] && other.name == entry.name)
                .map(|(i, _)| i);

            match paired {
                None => self.emit_subtree(Side::Left, &path, DiffKind::Deleted),
                Some(i) => {
                    rhs_matched[i] = true;

                    match (entry.kind.is_dir(), rhs[i].kind.is_dir()) {
                        (true, true) => self.compare_level(&path),
                        (false, false) => self.classify_files(&path),
                        _ => {
                            // type mismatch: no attempt to diff a file
                            // against a directory's contents
                            self.emit_subtree(Side::Left, &path, DiffKind::Deleted);
                            self.emit_subtree(Side::Right, &path, DiffKind::Added);
                        }
                    }
                }
            }
        }

        for (i, entry) in rhs.iter().enumerate() {
            if !rhs_matched[i] {
                let path = join_rel(prefix, &entry.name);
                self.emit_subtree(Side::Right, &path, DiffKind::Added);
            }
        }
    }

    fn children_of(&mut self, side: Side, prefix: &str) -> Vec<TreeEntry> {
        match self.workspace(side).list_dir(prefix) {
            Ok(entries) => entries,
            Err(cause) => {
                self.warn(prefix, &cause);
                Vec::new()
            }
        }
    }

    /// Record the whole one-sided subtree under one kind, the subtree root
    /// before its descendants.
    fn emit_subtree(&mut self, side: Side, rel: &str, kind: DiffKind) {
        let workspace = self.workspace(side);

        for path in workspace.walk(rel) {
            let location = workspace.locate(&path);
            self.entries.push(DiffEntry::new(path, location, kind));
        }
    }

    fn classify_files(&mut self, rel: &str) {
        let kind = match Inspector::new(self.left, self.right).classify_pair(rel) {
            Ok(kind) => kind,
            Err(cause) => {
                // unverifiable content counts as different
                self.warn(rel, &cause);
                DiffKind::Modified
            }
        };

        self.entries
            .push(DiffEntry::new(rel.to_string(), self.left.locate(rel), kind));
    }

    fn warn(&mut self, rel: &str, cause: &anyhow::Error) {
        self.warnings
            .push(TraversalWarning::new(rel.to_string(), format!("{cause:#}")));
    }
}
