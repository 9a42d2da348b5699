use anyhow::Result;

use crate::detect::info::ImageInfo;
use crate::detect::result::DetectionResult;

/// Detector backend trait.
///
/// A backend is handed the header of an image that opened cleanly and produces
/// a single detection.
pub trait DetectorBackend: Send {
    /// Backend identifier, used as the registry key and in configuration.
    fn name(&self) -> &'static str;

    /// Run detection on an opened image.
    fn detect(&mut self, image: &ImageInfo) -> Result<DetectionResult>;
}
