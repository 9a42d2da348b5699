/// Result of running detection on an image.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    /// Human-readable label of the primary detection.
    pub label: String,
    /// Confidence of the primary detection.
    pub confidence: f64,
}

impl DetectionResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}
