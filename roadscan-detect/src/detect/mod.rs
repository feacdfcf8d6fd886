pub mod classify;
pub mod color;
pub mod edge;
pub mod property;
pub mod score;
pub mod segment;
pub mod surface;

use crate::detect::color::RoadColorCatalog;
use crate::detect::edge::EdgeAnalyzer;
use crate::detect::property::detection_result::DetectionResult;
use crate::detect::property::feature_set::FeatureSet;
use crate::detect::property::validation_result::ValidationResult;
use crate::detect::segment::DarkRegions;
use crate::detect::surface::SurfaceScan;
use crate::error::{DetectError, DetectResult};
use log::{debug, warn};
use roadscan_media::PixelBuffer;

// Empirical values with no documented derivation.
// TODO: calibrate DARK_THRESHOLD and MIN_POTHOLE_SIZE against a labelled road photo set.
pub(crate) const DARK_THRESHOLD: f64 = 60.0; // Mean channel brightness below this is "dark"
pub(crate) const MIN_POTHOLE_SIZE: usize = 50; // Pixels a dark cluster needs to count
pub(crate) const EDGE_THRESHOLD: f64 = 25.0; // Max neighbour brightness step for a "strong" edge
pub(crate) const ROAD_SURFACE_THRESHOLD: f64 = 0.3; // Road fraction gating the whole pipeline

pub(crate) const NON_ROAD_CONFIDENCE: f64 = 0.1;
pub(crate) const POTHOLE_CONFIDENCE_THRESHOLD: f64 = 0.4;
pub(crate) const SUGGEST_POTHOLE_CONFIDENCE: f64 = 0.6; // Report prefill only above this

/// Stateless pothole heuristic over a decoded RGBA photo.
///
/// The only configuration is the road color catalog; every threshold is a
/// constant. A detector is `Copy` and may be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotholeDetector {
    catalog: RoadColorCatalog,
}

impl PotholeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self, buffer: &PixelBuffer<'_>) -> DetectResult<ValidationResult> {
        check_buffer(buffer)?;

        let scan = SurfaceScan::scan(buffer, &self.catalog);
        Ok(ValidationResult::from_road_ratio(scan.road_ratio()))
    }

    /// Extracts every feature the scorer uses, without the road surface gate.
    pub fn analyze_features(&self, buffer: &PixelBuffer<'_>) -> DetectResult<FeatureSet> {
        check_buffer(buffer)?;

        let scan = SurfaceScan::scan(buffer, &self.catalog);
        Ok(self.extract_features(buffer, &scan))
    }

    pub fn detect(&self, buffer: &PixelBuffer<'_>) -> DetectResult<DetectionResult> {
        check_buffer(buffer)?;

        // 1. Road surface and dark pixel counts, one pass
        let scan = SurfaceScan::scan(buffer, &self.catalog);
        let road_ratio = scan.road_ratio();
        if road_ratio < ROAD_SURFACE_THRESHOLD {
            debug!(
                "Road surface ratio {:.3} below {}, skipping segmentation",
                road_ratio, ROAD_SURFACE_THRESHOLD
            );
            return Ok(DetectionResult::non_road());
        }

        // 2. - 3. Dark clusters and their edges
        let features = self.extract_features(buffer, &scan);

        // 4. Score and classify
        let confidence = features.confidence();
        debug!("Features {:?} scored {:.4}", features, confidence);

        Ok(DetectionResult::classify(&features, confidence))
    }

    fn extract_features(&self, buffer: &PixelBuffer<'_>, scan: &SurfaceScan) -> FeatureSet {
        let regions = DarkRegions::segment(buffer);
        let strong_edge_count = EdgeAnalyzer::new(buffer).count_strong_edges(&regions);

        FeatureSet {
            road_surface_ratio: scan.road_ratio(),
            qualifying_cluster_count: regions.len(),
            dark_pixel_ratio: scan.dark_ratio(),
            strong_edge_count,
        }
    }
}

fn check_buffer(buffer: &PixelBuffer<'_>) -> DetectResult<()> {
    if buffer.is_well_formed() {
        return Ok(());
    }

    let err = DetectError::invalid_input(buffer);
    warn!("Rejected pixel buffer: {}", err);
    Err(err)
}
