use crate::detect::property::detection_result::percent;
use crate::detect::ROAD_SURFACE_THRESHOLD;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub road_percentage: u32,
    pub recommendation: String,
}

impl ValidationResult {
    pub fn from_road_ratio(road_ratio: f64) -> Self {
        let is_valid = road_ratio > ROAD_SURFACE_THRESHOLD;
        let recommendation = if is_valid {
            "Suitable for pothole detection"
        } else {
            "Image may not show enough road surface"
        };

        ValidationResult {
            is_valid,
            road_percentage: percent(road_ratio),
            recommendation: recommendation.to_string(),
        }
    }
}
