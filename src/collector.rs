//! Collects uploaded screenshots in upload order.

use std::path::Path;

use tracing::debug;

use crate::error::RunshotError;
use crate::types::UploadedImage;

/// Accumulates decoded images, preserving the order they were pushed in.
#[derive(Debug, Default)]
pub struct ImageCollector {
    images: Vec<UploadedImage>,
}

impl ImageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and append one uploaded file.
    pub fn push(&mut self, name: impl Into<String>, data: Vec<u8>) -> Result<(), RunshotError> {
        let image = UploadedImage::decode(name, data)?;
        debug!(
            index = self.images.len(),
            name = %image.name,
            width = image.width,
            height = image.height,
            "collected image"
        );
        self.images.push(image);
        Ok(())
    }

    /// Append an image re-posted from a rendered preview.
    pub fn push_data_uri(&mut self, name: impl Into<String>, uri: &str) -> Result<(), RunshotError> {
        let image = UploadedImage::from_data_uri(name, uri)?;
        self.images.push(image);
        Ok(())
    }

    /// Read and append image files from disk, in the given order.
    pub async fn push_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<(), RunshotError> {
        for path in paths {
            let path = path.as_ref();
            let data = tokio::fs::read(path).await?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.push(name, data)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The collected images in upload order.
    pub fn finish(self) -> Vec<UploadedImage> {
        self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::image::test_support::{jpeg, png};
    use tempfile::TempDir;

    #[test]
    fn preserves_upload_order() {
        let mut collector = ImageCollector::new();
        collector.push("c.png", png(1, 1)).unwrap();
        collector.push("a.jpg", jpeg(2, 2)).unwrap();
        collector.push("b.png", png(3, 3)).unwrap();

        let names: Vec<_> = collector.finish().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["c.png", "a.jpg", "b.png"]);
    }

    #[test]
    fn empty_collector_yields_nothing() {
        let collector = ImageCollector::new();
        assert!(collector.is_empty());
        assert!(collector.finish().is_empty());
    }

    #[test]
    fn corrupt_file_fails_the_push() {
        let mut collector = ImageCollector::new();
        collector.push("ok.png", png(1, 1)).unwrap();
        assert!(collector.push("bad.png", vec![0, 1, 2, 3]).is_err());
        assert_eq!(collector.len(), 1);
    }

    #[tokio::test]
    async fn reads_paths_in_argument_order() {
        let dir = TempDir::new().unwrap();
        let second = dir.path().join("second.png");
        let first = dir.path().join("first.jpg");
        std::fs::write(&second, png(2, 1)).unwrap();
        std::fs::write(&first, jpeg(1, 2)).unwrap();

        let mut collector = ImageCollector::new();
        collector.push_paths(&[&first, &second]).await.unwrap();

        let images = collector.finish();
        assert_eq!(images[0].name, "first.jpg");
        assert_eq!(images[1].name, "second.png");
    }

    #[tokio::test]
    async fn missing_path_is_io_error() {
        let mut collector = ImageCollector::new();
        let err = collector
            .push_paths(&["/definitely/not/here.png"])
            .await
            .unwrap_err();
        assert!(matches!(err, RunshotError::Io(_)));
    }
}
