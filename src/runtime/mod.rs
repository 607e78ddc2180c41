//! Runtime abstraction for file-system access.
//!
//! The loader and the transformer only ever touch the file system through
//! [`Runtime`], so tests can swap in the generated `MockRuntime`.

mod fs;

use anyhow::Result;
use std::io::{Read, Write};
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    /// Read a whole file into memory.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Open a file for streaming reads.
    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>>;

    /// Create (or truncate) a file for writing.
    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        self.open_impl(path)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>> {
        self.create_file_impl(path)
    }
}
