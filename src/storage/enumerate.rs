//! Directory enumeration: count the playable GIF files in a directory

use super::mount::{StorageMount, StorageError};

/// Count the eligible GIF files in `dir`, walking every entry exactly once.
///
/// Returns `Ok(0)` for a directory with no eligible entries; only a missing
/// directory is an error. When `verbose` is set, each eligible filename is
/// emitted to the log in traversal order as a diagnostic side effect;
/// non-eligible entries are skipped silently. The directory handle is
/// dropped on every exit path, including early failure.
pub fn count_gif_files(
    mount: &mut dyn StorageMount,
    dir: &str,
    verbose: bool,
) -> Result<usize, StorageError> {
    let mut stream = mount.open_dir(dir)?;
    let mut count = 0;
    while let Some(entry) = stream.next_entry()? {
        if entry.is_eligible() {
            if verbose {
                log::info!("{}", entry.name);
            }
            count += 1;
        } else {
            log::debug!("skipping {}", entry.name);
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryMount;

    fn sample_mount() -> MemoryMount {
        let mut mount = MemoryMount::new();
        mount.add_file("gifs", "a.gif", b"aaa".to_vec());
        mount.add_file("gifs", "b.txt", b"bbb".to_vec());
        mount.add_file("gifs", "c.GIF", b"ccc".to_vec());
        mount.add_file("gifs", "d.bmp", b"ddd".to_vec());
        mount
    }

    #[test]
    fn test_count_filters_by_suffix() {
        let mut mount = sample_mount();
        assert_eq!(count_gif_files(&mut mount, "gifs", false).unwrap(), 2);
    }

    #[test]
    fn test_count_is_repeatable() {
        let mut mount = sample_mount();
        let first = count_gif_files(&mut mount, "gifs", false).unwrap();
        let second = count_gif_files(&mut mount, "gifs", true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_directory_counts_zero() {
        let mut mount = MemoryMount::new();
        mount.add_dir("gifs");
        assert_eq!(count_gif_files(&mut mount, "gifs", false).unwrap(), 0);
    }

    #[test]
    fn test_directories_are_not_counted() {
        let mut mount = MemoryMount::new();
        mount.add_subdir("gifs", "folder.gif");
        mount.add_file("gifs", "real.gif", b"r".to_vec());
        assert_eq!(count_gif_files(&mut mount, "gifs", false).unwrap(), 1);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let mut mount = MemoryMount::new();
        assert!(matches!(
            count_gif_files(&mut mount, "missing", false),
            Err(StorageError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_count_on_fs_mount() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("gifs")).unwrap();
        for name in ["one.gif", "two.GIF", "notes.txt"] {
            std::fs::File::create(dir.path().join("gifs").join(name)).unwrap();
        }
        let mut mount = crate::storage::FsMount::init(dir.path()).unwrap();
        assert_eq!(count_gif_files(&mut mount, "gifs", false).unwrap(), 2);
    }
}
