use anyhow::Result;

use crate::detect::backend::DetectorBackend;
use crate::detect::info::ImageInfo;
use crate::detect::result::DetectionResult;

/// Label reported by the stub backend for every image.
pub const STUB_LABEL: &str = "Example detection";

/// Confidence reported by the stub backend for every image.
pub const STUB_CONFIDENCE: f64 = 0.95;

/// Placeholder backend. Every opened image yields the same fixed detection.
#[derive(Default)]
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DetectorBackend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn detect(&mut self, _image: &ImageInfo) -> Result<DetectionResult> {
        Ok(DetectionResult::new(STUB_LABEL, STUB_CONFIDENCE))
    }
}
