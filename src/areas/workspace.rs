use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a directory listing reports a child to be.
///
/// Anything that is not a directory is treated as a file, following the
/// host filesystem's semantics (symlinks are resolved the way `is_dir`
/// resolves them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn of(path: &Path) -> Self {
        if path.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Join two relative path segments with `/`, the separator shared by both
/// trees. Root-level entries carry no prefix.
pub fn join_rel(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Read access to one side of the comparison.
///
/// The comparator only talks to this trait, so the recursion can be driven
/// by an in-memory tree in unit tests without touching the filesystem.
pub trait Workspace {
    /// List the children of a directory, names and kinds only.
    ///
    /// Errors when the directory itself cannot be enumerated; the caller
    /// decides whether that is fatal.
    fn list_dir(&self, rel: &str) -> anyhow::Result<Vec<TreeEntry>>;

    /// Flatten the subtree rooted at `rel` into relative paths, the root
    /// entry first, then descendants depth-first in native listing order.
    /// A plain file walks to just itself. Unreadable subdirectories
    /// contribute no descendants.
    fn walk(&self, rel: &str) -> Vec<String>;

    fn file_size(&self, rel: &str) -> anyhow::Result<u64>;

    fn read_file(&self, rel: &str) -> anyhow::Result<Bytes>;

    /// Absolute locator of the entry behind a relative path.
    fn locate(&self, rel: &str) -> PathBuf;
}

#[derive(Debug)]
pub struct DiskWorkspace {
    root: Box<Path>,
}

impl DiskWorkspace {
    pub fn new(root: Box<Path>) -> Self {
        DiskWorkspace { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl Workspace for DiskWorkspace {
    fn list_dir(&self, rel: &str) -> anyhow::Result<Vec<TreeEntry>> {
        let dir_path = self.absolute(rel);

        let entries = std::fs::read_dir(&dir_path)
            .with_context(|| format!("Failed to list directory {:?}", dir_path))?;

        Ok(entries
            .filter_map(|entry| entry.ok())
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                TreeEntry::new(name, EntryKind::of(&entry.path()))
            })
            .collect::<Vec<_>>())
    }

    fn walk(&self, rel: &str) -> Vec<String> {
        let base = self.absolute(rel);

        WalkDir::new(&base)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let suffix = entry.path().strip_prefix(&base).ok()?;
                // reassemble with `/` so both trees share one path vocabulary
                let suffix = suffix
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                if suffix.is_empty() {
                    Some(rel.to_string())
                } else {
                    Some(join_rel(rel, &suffix))
                }
            })
            .collect::<Vec<_>>()
    }

    fn file_size(&self, rel: &str) -> anyhow::Result<u64> {
        let file_path = self.absolute(rel);

        let metadata = std::fs::metadata(&file_path)
            .with_context(|| format!("Failed to stat file {:?}", file_path))?;

        Ok(metadata.len())
    }

    fn read_file(&self, rel: &str) -> anyhow::Result<Bytes> {
        let file_path = self.absolute(rel);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Failed to read file {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    fn locate(&self, rel: &str) -> PathBuf {
        self.absolute(rel)
    }
}
