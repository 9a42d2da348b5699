//! Image stub processor.
//!
//! Opens the file as an image, reading only its header to confirm the format
//! is recognised and the dimensions parse, then asks the configured detector
//! backend for a result. Every failure, whatever its cause, becomes an error
//! payload; nothing propagates past `process`.

use anyhow::{anyhow, Context, Result};
use image::ImageReader;
use std::path::Path;

use crate::config::ProcessorConfig;
use crate::detect::{BackendRegistry, DetectionResult, ImageInfo};
use crate::payload::Payload;

pub struct ImageProcessor {
    registry: BackendRegistry,
}

impl ImageProcessor {
    pub fn new(registry: BackendRegistry) -> Self {
        Self { registry }
    }

    /// Processor over the built-in backends with `cfg.backend` as default.
    pub fn from_config(cfg: &ProcessorConfig) -> Result<Self> {
        let mut registry = BackendRegistry::with_builtin();
        registry
            .set_default(&cfg.backend)
            .with_context(|| format!("select detector backend (available: {:?})", registry.list()))?;
        Ok(Self::new(registry))
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.registry.default_name()
    }

    /// Open the image at `path` and run detection, mapping any error to the
    /// error payload.
    pub fn process(&self, path: &Path) -> Payload {
        match self.try_process(path) {
            Ok(detection) => Payload::from(detection),
            Err(err) => {
                log::warn!("image processing failed for {}: {:#}", path.display(), err);
                Payload::from_error(&err)
            }
        }
    }

    fn try_process(&self, path: &Path) -> Result<DetectionResult> {
        let image = open_image(path)?;
        self.registry.detect(&image)
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new(BackendRegistry::with_builtin())
    }
}

/// Process `path` with the default stub backend.
pub fn process_image(path: impl AsRef<Path>) -> Payload {
    ImageProcessor::default().process(path.as_ref())
}

/// Open an image and read its header. Pixel data is not decoded, so neither
/// image size nor a damaged body past the header causes a failure.
///
/// The format is guessed from the file's magic bytes, falling back to its
/// extension.
pub fn open_image(path: &Path) -> Result<ImageInfo> {
    let mut reader = ImageReader::open(path)
        .with_context(|| format!("open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("read image {}", path.display()))?;
    reader.no_limits();
    let format = reader
        .format()
        .ok_or_else(|| anyhow!("cannot identify image file {}", path.display()))?;
    let (width, height) = reader
        .into_dimensions()
        .with_context(|| format!("read image header {}", path.display()))?;
    log::debug!(
        "opened {} ({:?}, {}x{})",
        path.display(),
        format,
        width,
        height
    );
    Ok(ImageInfo {
        width,
        height,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_backend_is_rejected_at_construction() {
        let cfg = ProcessorConfig {
            backend: "onnx".to_string(),
        };
        let err = ImageProcessor::from_config(&cfg).err().unwrap();
        let message = format!("{:#}", err);
        assert!(message.contains("backend 'onnx' not registered"));
        assert!(message.contains("stub"));
    }

    #[test]
    fn default_processor_uses_stub_backend() {
        assert_eq!(ImageProcessor::default().backend_name(), Some("stub"));
    }

    #[test]
    fn missing_file_yields_error_payload() {
        let payload = process_image("/nonexistent/dir/image.png");
        match payload {
            Payload::Error(err) => assert!(err.error.contains("/nonexistent/dir/image.png")),
            other => panic!("expected error payload, got {:?}", other),
        }
    }
}
