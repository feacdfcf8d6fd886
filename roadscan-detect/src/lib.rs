pub mod batch;
pub mod detect;
pub mod error;

pub use crate::batch::detect_batch;
pub use crate::detect::color::{ColorRange, RoadColorCatalog, ROAD_COLOR_CATALOG};
pub use crate::detect::property::detection_result::DetectionResult;
pub use crate::detect::property::feature_set::FeatureSet;
pub use crate::detect::property::issue_suggestion::{IssueCategory, IssueSuggestion};
pub use crate::detect::property::validation_result::ValidationResult;
pub use crate::detect::PotholeDetector;
pub use crate::error::{DetectError, DetectResult};

pub use roadscan_media::PixelBuffer;

/// Pre-flight check: is there enough road surface in the photo to run detection at all.
pub fn validate(buffer: &PixelBuffer<'_>) -> DetectResult<ValidationResult> {
    PotholeDetector::default().validate(buffer)
}

/// Runs the full pothole heuristic with the built-in road color catalog.
pub fn detect(buffer: &PixelBuffer<'_>) -> DetectResult<DetectionResult> {
    PotholeDetector::default().detect(buffer)
}
