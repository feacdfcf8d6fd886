use crate::detect::classify::{AnalysisBand, ImageType, Recommendation};
use crate::detect::property::feature_set::FeatureSet;
use crate::detect::{NON_ROAD_CONFIDENCE, POTHOLE_CONFIDENCE_THRESHOLD, ROAD_SURFACE_THRESHOLD};
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub is_pothole: bool,
    pub confidence: f64,

    pub road_surface_percent: u32,
    pub dark_cluster_count: usize,
    pub potential_pixel_percent: u32,
    pub edge_intensity_percent: u32,

    pub analysis: String,
    pub image_type: ImageType,
    pub recommendation: String,
    pub is_road_image: bool,
}

impl Display for DetectionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pothole: {}, Confidence: {:.2}, Road: {}%, Clusters: {}, Image: {}, Analysis: {}",
            self.is_pothole,
            self.confidence,
            self.road_surface_percent,
            self.dark_cluster_count,
            self.image_type,
            self.analysis
        )
    }
}

impl DetectionResult {
    /// Fixed answer for photos without enough road surface to analyse.
    pub fn non_road() -> Self {
        DetectionResult {
            is_pothole: false,
            confidence: NON_ROAD_CONFIDENCE,
            road_surface_percent: 0,
            dark_cluster_count: 0,
            potential_pixel_percent: 0,
            edge_intensity_percent: 0,
            analysis: AnalysisBand::NotRoad.to_string(),
            image_type: ImageType::NonRoad,
            recommendation: Recommendation::UploadRoadPhoto.to_string(),
            is_road_image: false,
        }
    }

    pub fn classify(features: &FeatureSet, confidence: f64) -> Self {
        let road_ratio = features.road_surface_ratio;
        let clusters = features.qualifying_cluster_count;

        DetectionResult {
            is_pothole: confidence > POTHOLE_CONFIDENCE_THRESHOLD,
            confidence,
            road_surface_percent: percent(road_ratio),
            dark_cluster_count: clusters,
            potential_pixel_percent: percent(features.dark_pixel_ratio),
            edge_intensity_percent: percent(features.edge_density()),
            analysis: AnalysisBand::get_band(confidence, road_ratio).to_string(),
            image_type: ImageType::get_type(road_ratio),
            recommendation: Recommendation::get_recommendation(confidence, clusters).to_string(),
            is_road_image: road_ratio >= ROAD_SURFACE_THRESHOLD,
        }
    }
}

/// Ratio to a whole percentage, halves rounding up.
pub(crate) fn percent(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_road_result_is_fixed() {
        let result = DetectionResult::non_road();
        assert!(!result.is_pothole);
        assert!(!result.is_road_image);
        assert_eq!(result.confidence, 0.1);
        assert_eq!(result.image_type, ImageType::NonRoad);
        assert_eq!(result.road_surface_percent, 0);
        assert!(result.analysis.starts_with("Not a road image"));
    }

    #[test]
    fn classify_maps_features() {
        let features = FeatureSet {
            road_surface_ratio: 0.655,
            qualifying_cluster_count: 2,
            dark_pixel_ratio: 0.0449,
            strong_edge_count: 150,
        };
        let result = DetectionResult::classify(&features, 0.62);

        assert!(result.is_pothole);
        assert!(result.is_road_image);
        assert_eq!(result.road_surface_percent, 66);
        assert_eq!(result.potential_pixel_percent, 4);
        assert_eq!(result.edge_intensity_percent, 75);
        assert_eq!(result.dark_cluster_count, 2);
        assert_eq!(result.image_type, ImageType::GoodRoad);
        assert_eq!(result.analysis, AnalysisBand::Medium.to_string());
        assert_eq!(
            result.recommendation,
            "Strong evidence of 2 potential pothole(s). Consider reporting."
        );
    }

    #[test]
    fn edge_intensity_is_zero_without_clusters() {
        let features = FeatureSet {
            road_surface_ratio: 1.0,
            qualifying_cluster_count: 0,
            dark_pixel_ratio: 0.0,
            strong_edge_count: 0,
        };
        let result = DetectionResult::classify(&features, features.confidence());
        assert_eq!(result.edge_intensity_percent, 0);
        assert!(!result.is_pothole);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(DetectionResult::non_road()).unwrap();
        assert_eq!(json["isPothole"], false);
        assert_eq!(json["imageType"], "non-road");
        assert_eq!(json["isRoadImage"], false);
        assert_eq!(json["confidence"], 0.1);
    }
}
