//! Capability-based file access for auction documents.

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Write `contents` to `path`, creating missing parent directories.
pub(crate) fn write_utf8_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("output path should include a file name"))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let (base, relative) = split_base(parent)?;
    let root = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let dir = if relative.as_str().is_empty() {
        root
    } else {
        root.create_dir_all(&relative)?;
        root.open_dir(&relative)?
    };
    dir.write(file_name, contents)
}

/// Split a directory path into an ambient base directory and the relative
/// remainder beneath it.
fn split_base(path: &Utf8Path) -> io::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let std_path = path.as_std_path();
    let base = match std_path.components().next() {
        // Windows drive or UNC prefix, resolved from the prefix root.
        Some(Component::Prefix(prefix)) => {
            let drive = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(drive).join(std::path::MAIN_SEPARATOR.to_string())
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
        _ => return Ok((Utf8PathBuf::from("."), path.to_path_buf())),
    };
    let relative = path
        .strip_prefix(&base)
        .map_err(|_| io::Error::other("failed to strip the root from an absolute path"))?;
    Ok((base, relative.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    fn relative_paths_resolve_from_the_working_directory() {
        let (base, relative) = split_base(Utf8Path::new("out/runs")).expect("split");
        assert_eq!(base, Utf8PathBuf::from("."));
        assert_eq!(relative, Utf8PathBuf::from("out/runs"));
    }

    #[cfg(unix)]
    #[rstest]
    fn absolute_paths_resolve_from_the_root() {
        let (base, relative) = split_base(Utf8Path::new("/tmp/runs")).expect("split");
        assert_eq!(base, Utf8PathBuf::from("/"));
        assert_eq!(relative, Utf8PathBuf::from("tmp/runs"));
    }

    #[rstest]
    fn writes_create_missing_directories() {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        let target = root.join("nested/deeper/auction.json");
        write_utf8_file(&target, b"{}").expect("write nested file");
        let written = std::fs::read(target.as_std_path()).expect("read back");
        assert_eq!(written, b"{}");
    }
}
