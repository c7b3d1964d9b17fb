//! Directory entry structure and GIF eligibility filter

/// Filename suffix recognized as an animated GIF, matched case-insensitively
pub const GIF_SUFFIX: &str = ".gif";

/// A single directory entry observed during one traversal step.
///
/// Entries are transient: they exist for one iteration step of a
/// [`DirStream`](super::DirStream) and are never retained by the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Entry name (no path components)
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl FileEntry {
    /// Create an entry for a regular file
    pub fn new_file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Create an entry for a directory
    pub fn new_directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Check whether this entry is a playable GIF file: a regular
    /// (non-directory) entry whose name ends with [`GIF_SUFFIX`],
    /// ASCII case-insensitive.
    pub fn is_eligible(&self) -> bool {
        !self.is_dir && has_gif_suffix(&self.name)
    }
}

/// Case-insensitive suffix match on raw bytes, safe for any UTF-8 name
fn has_gif_suffix(name: &str) -> bool {
    let name = name.as_bytes();
    let suffix = GIF_SUFFIX.as_bytes();
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_match_is_case_insensitive() {
        assert!(FileEntry::new_file("a.gif").is_eligible());
        assert!(FileEntry::new_file("c.GIF").is_eligible());
        assert!(FileEntry::new_file("MiXeD.GiF").is_eligible());
    }

    #[test]
    fn test_other_suffixes_rejected() {
        assert!(!FileEntry::new_file("b.txt").is_eligible());
        assert!(!FileEntry::new_file("d.bmp").is_eligible());
        assert!(!FileEntry::new_file("archive.gif.bak").is_eligible());
        assert!(!FileEntry::new_file("gif").is_eligible());
        assert!(!FileEntry::new_file("").is_eligible());
    }

    #[test]
    fn test_directories_never_eligible() {
        assert!(!FileEntry::new_directory("folder.gif").is_eligible());
        assert!(!FileEntry::new_directory("gifs").is_eligible());
    }

    #[test]
    fn test_bare_suffix_is_eligible() {
        // ".gif" itself matches; the filter is a pure suffix check
        assert!(FileEntry::new_file(".gif").is_eligible());
    }
}
