//! Storage mount abstraction and implementations
//!
//! Defines the capability traits the rest of the crate is written against
//! (open a directory stream, open a named file) plus two implementations:
//! [`FsMount`] over the host filesystem and [`MemoryMount`] for tests and
//! host-side development with a deterministic traversal order.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use super::entry::FileEntry;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage device absent or unreadable. Fatal to every other operation;
    /// retrying without physical intervention is futile.
    #[error("storage mount failed: {0}")]
    MountFailure(String),

    #[error("directory not found: {0}")]
    DirectoryNotFound(String),

    /// Requested GIF index is outside the current eligible-file population.
    /// The caller should re-query the count before retrying.
    #[error("gif index {index} out of range (directory holds {count} eligible files)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("could not open {name}: {source}")]
    OpenFailure {
        name: String,
        source: std::io::Error,
    },

    /// Seek position beyond the end of the open file. The decoder should
    /// treat this as end of data.
    #[error("seek to {position} beyond end of file ({size} bytes)")]
    SeekOutOfBounds { position: u64, size: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability of a mounted storage device: open a directory stream, open a
/// named file. Everything above this trait is storage-agnostic.
pub trait StorageMount: Send {
    /// Open a directory for a single traversal, failing with
    /// [`StorageError::DirectoryNotFound`] if it does not exist.
    ///
    /// The returned stream is owned by the caller for the duration of one
    /// traversal and closed when dropped; it must not be held across calls.
    ///
    /// PRECONDITION of the whole indexing scheme: for an unmodified
    /// directory, repeated traversals yield entries in the same order. The
    /// mount inherits whatever order its backing store provides; this crate
    /// documents the assumption but cannot enforce it.
    fn open_dir(&mut self, name: &str) -> Result<Box<dyn DirStream>, StorageError>;

    /// Open a named file inside `dir` for reading, failing with
    /// [`StorageError::FileNotFound`] if the name does not resolve, or
    /// [`StorageError::OpenFailure`] for any other storage error.
    fn open_file(&mut self, dir: &str, name: &str) -> Result<Box<dyn StorageFile>, StorageError>;
}

/// One in-flight directory traversal
pub trait DirStream {
    /// Next entry in traversal order, or `None` when the directory is
    /// exhausted
    fn next_entry(&mut self) -> Result<Option<FileEntry>, StorageError>;
}

/// An open, readable file on the mounted storage
pub trait StorageFile: Send {
    /// Total length of the file in bytes
    fn size(&self) -> u64;

    /// Read up to `buf.len()` bytes starting at `offset`. Returns the number
    /// of bytes actually read; a short read at end of file is normal.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, StorageError>;
}

/// Storage mount backed by the host filesystem
pub struct FsMount {
    root: PathBuf,
}

impl FsMount {
    /// Mount the device rooted at `root`, failing with
    /// [`StorageError::MountFailure`] if the root does not exist or is not a
    /// directory.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        match std::fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {
                log::debug!("mounted storage root {}", root.display());
                Ok(Self { root })
            }
            Ok(_) => Err(StorageError::MountFailure(format!(
                "{} is not a directory",
                root.display()
            ))),
            Err(e) => Err(StorageError::MountFailure(format!(
                "{}: {}",
                root.display(),
                e
            ))),
        }
    }
}

impl StorageMount for FsMount {
    fn open_dir(&mut self, name: &str) -> Result<Box<dyn DirStream>, StorageError> {
        let path = self.root.join(name);
        let inner = std::fs::read_dir(&path)
            .map_err(|_| StorageError::DirectoryNotFound(name.to_string()))?;
        Ok(Box::new(FsDirStream { inner }))
    }

    fn open_file(&mut self, dir: &str, name: &str) -> Result<Box<dyn StorageFile>, StorageError> {
        let path = self.root.join(dir).join(name);
        let file = File::open(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::FileNotFound(name.to_string()),
            _ => StorageError::OpenFailure {
                name: name.to_string(),
                source: e,
            },
        })?;
        let size = file.metadata()?.len();
        Ok(Box::new(FsFile { file, size }))
    }
}

/// Directory traversal over `std::fs::ReadDir`
struct FsDirStream {
    inner: std::fs::ReadDir,
}

impl DirStream for FsDirStream {
    fn next_entry(&mut self) -> Result<Option<FileEntry>, StorageError> {
        match self.inner.next() {
            Some(entry) => {
                let entry = entry?;
                let name = entry.file_name().to_string_lossy().into_owned();
                let is_dir = entry.file_type()?.is_dir();
                Ok(Some(FileEntry { name, is_dir }))
            }
            None => Ok(None),
        }
    }
}

/// Open file on an [`FsMount`]
struct FsFile {
    file: File,
    size: u64,
}

impl StorageFile for FsFile {
    fn size(&self) -> u64 {
        self.size
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, StorageError> {
        if offset >= self.size {
            return Ok(0);
        }
        self.file.seek(SeekFrom::Start(offset))?;
        let mut filled = 0;
        while filled < buf.len() {
            match self.file.read(&mut buf[filled..])? {
                0 => break,
                n => filled += n,
            }
        }
        Ok(filled)
    }
}

/// In-memory storage mount with insertion-ordered directory entries.
///
/// Traversal order is exactly the order entries were added, which makes the
/// index → name mapping fully deterministic. Useful for tests and for
/// developing against the library without real media present.
#[derive(Default)]
pub struct MemoryMount {
    dirs: HashMap<String, Vec<MemEntry>>,
}

struct MemEntry {
    name: String,
    is_dir: bool,
    data: Arc<Vec<u8>>,
}

impl MemoryMount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory
    pub fn add_dir(&mut self, name: &str) {
        self.dirs.entry(name.to_string()).or_default();
    }

    /// Add a file with the given contents to `dir`, creating the directory
    /// if needed
    pub fn add_file(&mut self, dir: &str, name: &str, data: impl Into<Vec<u8>>) {
        self.dirs.entry(dir.to_string()).or_default().push(MemEntry {
            name: name.to_string(),
            is_dir: false,
            data: Arc::new(data.into()),
        });
    }

    /// Add a subdirectory entry to `dir` (visible in traversal, not
    /// traversable itself)
    pub fn add_subdir(&mut self, dir: &str, name: &str) {
        self.dirs.entry(dir.to_string()).or_default().push(MemEntry {
            name: name.to_string(),
            is_dir: true,
            data: Arc::new(Vec::new()),
        });
    }
}

impl StorageMount for MemoryMount {
    fn open_dir(&mut self, name: &str) -> Result<Box<dyn DirStream>, StorageError> {
        let entries = self
            .dirs
            .get(name)
            .ok_or_else(|| StorageError::DirectoryNotFound(name.to_string()))?
            .iter()
            .map(|e| FileEntry {
                name: e.name.clone(),
                is_dir: e.is_dir,
            })
            .collect();
        Ok(Box::new(MemDirStream { entries, cursor: 0 }))
    }

    fn open_file(&mut self, dir: &str, name: &str) -> Result<Box<dyn StorageFile>, StorageError> {
        let entries = self
            .dirs
            .get(dir)
            .ok_or_else(|| StorageError::DirectoryNotFound(dir.to_string()))?;
        let entry = entries
            .iter()
            .find(|e| e.name == name && !e.is_dir)
            .ok_or_else(|| StorageError::FileNotFound(name.to_string()))?;
        Ok(Box::new(MemFile {
            data: Arc::clone(&entry.data),
        }))
    }
}

/// Directory traversal over a snapshot of a [`MemoryMount`] directory
struct MemDirStream {
    entries: Vec<FileEntry>,
    cursor: usize,
}

impl DirStream for MemDirStream {
    fn next_entry(&mut self) -> Result<Option<FileEntry>, StorageError> {
        match self.entries.get(self.cursor) {
            Some(entry) => {
                self.cursor += 1;
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Open file on a [`MemoryMount`]
struct MemFile {
    data: Arc<Vec<u8>>,
}

impl StorageFile for MemFile {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, StorageError> {
        if offset >= self.data.len() as u64 {
            return Ok(0);
        }
        let start = offset as usize;
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fs_mount_init_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsMount::init(dir.path()).is_ok());

        let missing = dir.path().join("nope");
        assert!(matches!(
            FsMount::init(&missing),
            Err(StorageError::MountFailure(_))
        ));

        let file_path = dir.path().join("plain.bin");
        std::fs::File::create(&file_path).unwrap();
        assert!(matches!(
            FsMount::init(&file_path),
            Err(StorageError::MountFailure(_))
        ));
    }

    #[test]
    fn test_fs_mount_open_dir_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut mount = FsMount::init(dir.path()).unwrap();
        assert!(matches!(
            mount.open_dir("missing"),
            Err(StorageError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_fs_mount_lists_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("gifs")).unwrap();
        std::fs::File::create(dir.path().join("gifs/a.gif")).unwrap();
        std::fs::create_dir(dir.path().join("gifs/sub")).unwrap();

        let mut mount = FsMount::init(dir.path()).unwrap();
        let mut stream = mount.open_dir("gifs").unwrap();
        let mut files = 0;
        let mut dirs = 0;
        while let Some(entry) = stream.next_entry().unwrap() {
            if entry.is_dir {
                dirs += 1;
                assert_eq!(entry.name, "sub");
            } else {
                files += 1;
                assert_eq!(entry.name, "a.gif");
            }
        }
        assert_eq!((files, dirs), (1, 1));
    }

    #[test]
    fn test_fs_file_read_at() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("gifs")).unwrap();
        let mut f = std::fs::File::create(dir.path().join("gifs/x.gif")).unwrap();
        f.write_all(b"0123456789").unwrap();

        let mut mount = FsMount::init(dir.path()).unwrap();
        let mut file = mount.open_file("gifs", "x.gif").unwrap();
        assert_eq!(file.size(), 10);

        let mut buf = [0u8; 4];
        assert_eq!(file.read_at(3, &mut buf).unwrap(), 4);
        assert_eq!(&buf, b"3456");

        // short read at end of file
        assert_eq!(file.read_at(8, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"89");

        // past end of file
        assert_eq!(file.read_at(10, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_fs_mount_open_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("gifs")).unwrap();
        let mut mount = FsMount::init(dir.path()).unwrap();
        assert!(matches!(
            mount.open_file("gifs", "missing.gif"),
            Err(StorageError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_memory_mount_traversal_order_is_insertion_order() {
        let mut mount = MemoryMount::new();
        mount.add_file("gifs", "z.gif", b"z".to_vec());
        mount.add_file("gifs", "a.gif", b"a".to_vec());
        mount.add_subdir("gifs", "nested");

        let mut stream = mount.open_dir("gifs").unwrap();
        let names: Vec<String> = std::iter::from_fn(|| stream.next_entry().unwrap())
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["z.gif", "a.gif", "nested"]);
    }

    #[test]
    fn test_memory_mount_open_file_skips_directories() {
        let mut mount = MemoryMount::new();
        mount.add_subdir("gifs", "trap.gif");
        assert!(matches!(
            mount.open_file("gifs", "trap.gif"),
            Err(StorageError::FileNotFound(_))
        ));
    }
}
