use crate::areas::workspace::DiskWorkspace;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// One comparison session: the two validated tree roots plus the output
/// channels the report is written to.
pub struct Comparison {
    left: DiskWorkspace,
    right: DiskWorkspace,
    writer: RefCell<Box<dyn std::io::Write>>,
    err_writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparison {
    pub fn new(
        left_path: &str,
        right_path: &str,
        writer: Box<dyn std::io::Write>,
        err_writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let left = Self::validate_root(left_path)?;
        let right = Self::validate_root(right_path)?;

        Ok(Comparison {
            left: DiskWorkspace::new(left.into_boxed_path()),
            right: DiskWorkspace::new(right.into_boxed_path()),
            writer: RefCell::new(writer),
            err_writer: RefCell::new(err_writer),
        })
    }

    /// Root invalidity is the only fatal condition; everything later in
    /// the walk degrades to warnings.
    fn validate_root(path: &str) -> anyhow::Result<PathBuf> {
        let path = Path::new(path);

        if !path.exists() {
            anyhow::bail!("Comparison root does not exist: {:?}", path);
        }
        if !path.is_dir() {
            anyhow::bail!("Comparison root is not a directory: {:?}", path);
        }

        Ok(path.canonicalize()?)
    }

    pub fn left(&self) -> &DiskWorkspace {
        &self.left
    }

    pub fn right(&self) -> &DiskWorkspace {
        &self.right
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn err_writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.err_writer.borrow_mut()
    }
}
