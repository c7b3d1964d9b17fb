//! Index resolution: map a zero-based ordinal to the Nth eligible filename
//!
//! Resolution re-walks the directory every time instead of caching the name
//! list. Lookup is O(index), memory is zero, which is the right trade for the
//! memory-constrained players this library targets. The mapping is only
//! stable while the directory is unmodified and the mount's traversal order
//! holds (see [`StorageMount::open_dir`]).

use super::mount::{StorageMount, StorageError};

/// Resolve the eligible file with ordinal `index` (zero-based, traversal
/// order) to its filename.
///
/// The directory is re-opened fresh; no previously obtained count is
/// trusted. Fails with [`StorageError::IndexOutOfRange`] carrying the number
/// of eligible files actually present, so the caller can re-query.
pub fn resolve_name(
    mount: &mut dyn StorageMount,
    dir: &str,
    index: usize,
) -> Result<String, StorageError> {
    let mut stream = mount.open_dir(dir)?;
    let mut seen = 0;
    while let Some(entry) = stream.next_entry()? {
        if entry.is_eligible() {
            if seen == index {
                return Ok(entry.name);
            }
            seen += 1;
        }
    }
    Err(StorageError::IndexOutOfRange { index, count: seen })
}

/// Resolve an index and copy the filename's UTF-8 bytes into a
/// caller-provided bounded buffer, truncating to capacity rather than
/// overflowing. Returns the number of bytes written.
///
/// Callers should size `buf` to the platform's maximum supported name
/// length; a truncated name will not open.
pub fn resolve_name_into(
    mount: &mut dyn StorageMount,
    dir: &str,
    index: usize,
    buf: &mut [u8],
) -> Result<usize, StorageError> {
    let name = resolve_name(mount, dir, index)?;
    let bytes = name.as_bytes();
    let n = bytes.len().min(buf.len());
    buf[..n].copy_from_slice(&bytes[..n]);
    Ok(n)
}
