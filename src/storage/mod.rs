//! Storage access module
//!
//! Provides the mounted-storage abstraction, GIF directory enumeration and
//! index-to-filename resolution. Filenames are never cached: the index of a
//! file is re-derived by walking the directory, trading O(index) lookups for
//! zero persistent memory.

mod entry;
mod enumerate;
mod mount;
mod resolve;

pub use entry::{FileEntry, GIF_SUFFIX};
pub use enumerate::count_gif_files;
pub use mount::{DirStream, FsMount, MemoryMount, StorageError, StorageFile, StorageMount};
pub use resolve::{resolve_name, resolve_name_into};
