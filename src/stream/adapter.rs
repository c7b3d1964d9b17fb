//! Byte-stream contract consumed by the GIF decoder
//!
//! The decoder has no filesystem knowledge; it drives playback entirely
//! through these five primitives against whatever session the player hands
//! it.

use crate::storage::StorageError;

/// Random/sequential byte access over the currently open file.
///
/// Every operation is safe to call with no file open and returns its
/// documented zero/sentinel value instead of faulting ("no open file" is the
/// zero state): `seek(0)` succeeds, `tell()`, `read_block` and `size()`
/// return 0, `read_byte` returns `None`. The decoder may legitimately probe
/// state before or after a session.
pub trait ByteStream {
    /// Reposition the read offset. Positions in `[0, size]` succeed (`size`
    /// itself is the end-of-file position); anything beyond fails with
    /// [`StorageError::SeekOutOfBounds`] and leaves the offset unchanged.
    fn seek(&mut self, position: u64) -> Result<(), StorageError>;

    /// Current read offset
    fn tell(&self) -> u64;

    /// Read one byte and advance the offset. `None` is the end-of-file
    /// sentinel; the offset does not advance past the end.
    fn read_byte(&mut self) -> Option<u8>;

    /// Read up to `buf.len()` bytes, advancing the offset by the amount
    /// read. A short read near end of file is normal, not an error; a
    /// genuine storage fault surfaces as 0 bytes (and a logged warning).
    fn read_block(&mut self, buf: &mut [u8]) -> usize;

    /// Total byte length of the open file
    fn size(&self) -> u64;
}
