//! Content file descriptor.
//!
//! The [`ContentFile`] struct is the caller-supplied record identifying a
//! remote or local resource and its expected total size. It is produced by
//! an external package/update model and consumed read-only for the
//! duration of one download call.

/// Descriptor for a single content file to retrieve.
///
/// # Example
///
/// ```
/// use contentfetch::ContentFile;
///
/// let content = ContentFile::new("https://example.com/data.bin", 4096);
///
/// assert_eq!(content.source, "https://example.com/data.bin");
/// assert_eq!(content.size, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    /// Source location: an `http`, `https`, or `file` scheme URL.
    pub source: String,

    /// Expected total size in bytes, as declared by the package metadata.
    pub size: u64,
}

impl ContentFile {
    /// Create a new content file descriptor.
    pub fn new(source: impl Into<String>, size: u64) -> Self {
        Self {
            source: source.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_file_new() {
        let content = ContentFile::new("https://example.com/a.bin", 100);

        assert_eq!(content.source, "https://example.com/a.bin");
        assert_eq!(content.size, 100);
    }

    #[test]
    fn test_content_file_clone_eq() {
        let content = ContentFile::new("file:///tmp/a.bin", 8);
        let copy = content.clone();

        assert_eq!(content, copy);
    }
}
