//! Entry point from an ambient filesystem path into capability-based access.

use std::io;
use std::path::Path;

use cap_std::ambient_authority;
use cap_std::fs::Dir;

/// Open the directory containing `path` and return it with the file name.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] when `path` does not end in a file
/// name, or the error raised while opening the parent directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use catalog_fixtures::open_parent_dir;
///
/// let (dir, file_name) = open_parent_dir(Path::new("Cargo.toml")).expect("crate root");
/// assert_eq!(file_name, Path::new("Cargo.toml"));
/// assert!(dir.exists(file_name));
/// ```
pub fn open_parent_dir(path: &Path) -> io::Result<(Dir, &Path)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path does not name a file")
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, Path::new(file_name)))
}
