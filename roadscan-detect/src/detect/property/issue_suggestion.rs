use crate::detect::property::detection_result::{percent, DetectionResult};
use crate::detect::SUGGEST_POTHOLE_CONFIDENCE;
use serde::Serialize;

pub const ANALYSIS_TYPE: &str = "heuristic";
const FALLBACK_TITLE: &str = "Surface issue detected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Pothole,
    Other,
}

/// Prefill for an issue report, derived from a single detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSuggestion {
    pub suggested_category: IssueCategory,
    pub suggested_title: String,
    pub confidence: f64,
    pub message: String,
    pub analysis_type: &'static str,
}

impl From<&DetectionResult> for IssueSuggestion {
    fn from(result: &DetectionResult) -> Self {
        let confident = result.is_road_image
            && result.is_pothole
            && result.confidence > SUGGEST_POTHOLE_CONFIDENCE;

        let (suggested_category, suggested_title) = if confident {
            (
                IssueCategory::Pothole,
                format!("Pothole Detected ({}% confidence)", percent(result.confidence)),
            )
        } else {
            (IssueCategory::Other, FALLBACK_TITLE.to_string())
        };

        IssueSuggestion {
            suggested_category,
            suggested_title,
            confidence: result.confidence,
            message: result.analysis.clone(),
            analysis_type: ANALYSIS_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::property::feature_set::FeatureSet;

    fn detection(road_surface_ratio: f64, confidence: f64) -> DetectionResult {
        let features = FeatureSet {
            road_surface_ratio,
            qualifying_cluster_count: 1,
            dark_pixel_ratio: 0.04,
            strong_edge_count: 60,
        };
        DetectionResult::classify(&features, confidence)
    }

    #[test]
    fn confident_pothole_is_suggested() {
        let suggestion = IssueSuggestion::from(&detection(0.7, 0.83));
        assert_eq!(suggestion.suggested_category, IssueCategory::Pothole);
        assert_eq!(suggestion.suggested_title, "Pothole Detected (83% confidence)");
        assert_eq!(suggestion.confidence, 0.83);
        assert_eq!(suggestion.analysis_type, "heuristic");
    }

    #[test]
    fn confidence_at_the_cutoff_stays_other() {
        let suggestion = IssueSuggestion::from(&detection(0.7, 0.6));
        assert_eq!(suggestion.suggested_category, IssueCategory::Other);
        assert_eq!(suggestion.suggested_title, "Surface issue detected");

        let suggestion = IssueSuggestion::from(&detection(0.7, 0.61));
        assert_eq!(suggestion.suggested_category, IssueCategory::Pothole);
        assert_eq!(suggestion.suggested_title, "Pothole Detected (61% confidence)");
    }

    #[test]
    fn non_road_photo_is_never_a_pothole() {
        let suggestion = IssueSuggestion::from(&DetectionResult::non_road());
        assert_eq!(suggestion.suggested_category, IssueCategory::Other);
        assert_eq!(suggestion.confidence, 0.1);
        assert!(suggestion.message.starts_with("Not a road image"));
    }

    #[test]
    fn serializes_for_report_prefill() {
        let json = serde_json::to_value(IssueSuggestion::from(&detection(0.7, 0.9))).unwrap();
        assert_eq!(json["suggestedCategory"], "pothole");
        assert_eq!(json["analysisType"], "heuristic");
        assert_eq!(json["suggestedTitle"], "Pothole Detected (90% confidence)");
    }
}
