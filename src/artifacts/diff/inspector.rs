use crate::areas::workspace::Workspace;
use crate::artifacts::diff::diff_entry::DiffKind;
use derive_new::new;
use sha1::{Digest, Sha1};

/// Decides whether a file present in both trees has identical content.
#[derive(new)]
pub struct Inspector<'w> {
    left: &'w dyn Workspace,
    right: &'w dyn Workspace,
}

impl<'w> Inspector<'w> {
    /// Classify a paired file as [`DiffKind::Same`] or [`DiffKind::Modified`].
    ///
    /// Unequal sizes settle the question without reading either file;
    /// equal sizes require hashing the full content of both sides, since
    /// size alone cannot prove equality. Errors are the caller's to
    /// absorb.
    pub fn classify_pair(&self, rel: &str) -> anyhow::Result<DiffKind> {
        if self.left.file_size(rel)? != self.right.file_size(rel)? {
            return Ok(DiffKind::Modified);
        }

        let left_digest = Self::content_digest(self.left, rel)?;
        let right_digest = Self::content_digest(self.right, rel)?;

        if left_digest == right_digest {
            Ok(DiffKind::Same)
        } else {
            Ok(DiffKind::Modified)
        }
    }

    fn content_digest(side: &dyn Workspace, rel: &str) -> anyhow::Result<String> {
        let content = side.read_file(rel)?;

        let mut hasher = Sha1::new();
        hasher.update(&content);

        let digest = hasher.finalize();
        Ok(format!("{digest:x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::workspace::memory::MemoryWorkspace;

    #[test]
    fn unequal_sizes_classify_modified_without_reading_content() {
        let left = MemoryWorkspace::new("a").file("f.txt", "short");
        let right = MemoryWorkspace::new("b").file("f.txt", "a fair bit longer");

        let kind = Inspector::new(&left, &right).classify_pair("f.txt").unwrap();

        assert_eq!(kind, DiffKind::Modified);
        assert!(left.reads().is_empty());
        assert!(right.reads().is_empty());
    }

    #[test]
    fn equal_sizes_with_different_content_classify_modified() {
        let left = MemoryWorkspace::new("a").file("f.txt", "x");
        let right = MemoryWorkspace::new("b").file("f.txt", "y");

        let kind = Inspector::new(&left, &right).classify_pair("f.txt").unwrap();

        assert_eq!(kind, DiffKind::Modified);
        assert_eq!(left.reads(), vec!["f.txt"]);
        assert_eq!(right.reads(), vec!["f.txt"]);
    }

    #[test]
    fn identical_content_classifies_same() {
        let left = MemoryWorkspace::new("a").file("f.txt", "hello");
        let right = MemoryWorkspace::new("b").file("f.txt", "hello");

        let kind = Inspector::new(&left, &right).classify_pair("f.txt").unwrap();

        assert_eq!(kind, DiffKind::Same);
    }

    #[test]
    fn unreadable_file_surfaces_the_error() {
        let left = MemoryWorkspace::new("a")
            .file("f.txt", "hello")
            .unreadable("f.txt");
        let right = MemoryWorkspace::new("b").file("f.txt", "hello");

        let result = Inspector::new(&left, &right).classify_pair("f.txt");

        assert!(result.is_err());
    }
}
