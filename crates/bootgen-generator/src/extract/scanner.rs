//! Recursive directory walk in sorted order.
//!
//! Sorting by path makes discovery order a function of the input tree alone,
//! independent of filesystem enumeration order. A parallel walk would have to
//! merge into the same order before classification.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collect every file under `root`, sorted by path.
pub fn scan(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn visit(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            visit(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
