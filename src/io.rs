//! Line-based file reading

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads the file at `path` as a list of lines, without trailing line
/// terminators.
///
/// # Errors
/// Any I/O error from opening or reading the file is propagated to the
/// caller.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}
