use std::path::{Path, PathBuf};

/// Extensions probed for an event image, in order.
const CANDIDATE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Result of looking up an event's image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventImage {
    /// An image file that exists on disk.
    File(PathBuf),
    /// Neither candidate exists; render a placeholder.
    Placeholder,
}

impl EventImage {
    /// File path, or `None` for the placeholder.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Placeholder => None,
        }
    }
}

/// Finds `<id>.png` or `<id>.jpg` under one directory.
#[derive(Debug, Clone)]
pub struct ImageLookup {
    dir: PathBuf,
}

impl ImageLookup {
    /// Look up images under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory being searched.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths probed for `id`, in fallback order.
    pub fn candidates(&self, id: u32) -> Vec<PathBuf> {
        CANDIDATE_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{id}.{ext}")))
            .collect()
    }

    /// First candidate that exists, else a placeholder.
    pub fn resolve(&self, id: u32) -> EventImage {
        if let Some(path) = self.candidates(id).into_iter().find(|p| p.is_file()) {
            return EventImage::File(path);
        }
        tracing::debug!(id, dir = %self.dir.display(), "no image for event, using placeholder");
        EventImage::Placeholder
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use std::fs;

    #[test]
    fn test_png_preferred_over_jpg() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("3.png"), b"png").unwrap();
        fs::write(dir.path().join("3.jpg"), b"jpg").unwrap();

        let lookup = ImageLookup::new(dir.path());
        assert_eq!(lookup.resolve(3), EventImage::File(dir.path().join("3.png")));
    }

    #[test]
    fn test_falls_back_to_jpg() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("7.jpg"), b"jpg").unwrap();

        let lookup = ImageLookup::new(dir.path());
        assert_eq!(lookup.resolve(7).path(), Some(dir.path().join("7.jpg").as_path()));
    }

    #[test]
    fn test_placeholder_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        // A directory named like an image is not an image.
        fs::create_dir(dir.path().join("9.png")).unwrap();

        let lookup = ImageLookup::new(dir.path());
        assert_eq!(lookup.resolve(9), EventImage::Placeholder);
        assert_eq!(lookup.resolve(10), EventImage::Placeholder);
    }
}
