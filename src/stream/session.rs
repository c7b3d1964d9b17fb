//! File session: the single open file backing the decoder's byte stream

use crate::storage::{resolve_name, StorageError, StorageFile, StorageMount};

use super::adapter::ByteStream;

/// The one live open file plus its read offset
struct OpenFile {
    file: Box<dyn StorageFile>,
    offset: u64,
}

/// Owns the single currently-open file and implements [`ByteStream`] over
/// it.
///
/// At most one file is open per session at any time; opening a new file
/// implicitly closes the previous one. The decoder receives the session by
/// reference and never sees storage internals. The session starts, and can
/// return to, the closed zero state, in which every [`ByteStream`] operation
/// returns its documented zero/sentinel value.
#[derive(Default)]
pub struct FileSession {
    current: Option<OpenFile>,
}

impl FileSession {
    /// Create a session with no file open
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `name` inside `dir`, closing any previously open file first and
    /// resetting the offset to 0. On failure the session is left closed.
    pub fn open_by_name(
        &mut self,
        mount: &mut dyn StorageMount,
        dir: &str,
        name: &str,
    ) -> Result<(), StorageError> {
        self.current = None;
        let file = mount.open_file(dir, name)?;
        log::debug!("opened {} ({} bytes)", name, file.size());
        self.current = Some(OpenFile { file, offset: 0 });
        Ok(())
    }

    /// Resolve `index` to a filename and open it in one step. Returns the
    /// resolved name; propagates [`StorageError::IndexOutOfRange`] from
    /// resolution and open failures from the mount.
    pub fn open_by_index(
        &mut self,
        mount: &mut dyn StorageMount,
        dir: &str,
        index: usize,
    ) -> Result<String, StorageError> {
        let name = resolve_name(mount, dir, index)?;
        self.open_by_name(mount, dir, &name)?;
        Ok(name)
    }

    /// Close the current file, if any, returning the session to the zero
    /// state
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Whether a file is currently open
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

impl ByteStream for FileSession {
    fn seek(&mut self, position: u64) -> Result<(), StorageError> {
        let size = self.size();
        if position > size {
            return Err(StorageError::SeekOutOfBounds { position, size });
        }
        if let Some(open) = &mut self.current {
            open.offset = position;
        }
        Ok(())
    }

    fn tell(&self) -> u64 {
        match &self.current {
            Some(open) => open.offset,
            None => 0,
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.read_block(&mut byte) {
            1 => Some(byte[0]),
            _ => None,
        }
    }

    fn read_block(&mut self, buf: &mut [u8]) -> usize {
        let open = match &mut self.current {
            Some(open) => open,
            None => return 0,
        };
        match open.file.read_at(open.offset, buf) {
            Ok(n) => {
                open.offset += n as u64;
                n
            }
            Err(e) => {
                log::warn!("read failed at offset {}: {}", open.offset, e);
                0
            }
        }
    }

    fn size(&self) -> u64 {
        match &self.current {
            Some(open) => open.file.size(),
            None => 0,
        }
    }
}
