use crate::detect::ROAD_SURFACE_THRESHOLD;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Diagnostic band of a scored photo.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum AnalysisBand {
    NotRoad,
    LimitedSurface,
    High,
    Medium,
    Low,
    VeryLow,
    Clear,
}

impl Display for AnalysisBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisBand::NotRoad => {
                write!(f, "Not a road image - insufficient road surface detected")
            }
            AnalysisBand::LimitedSurface => {
                write!(f, "Limited road surface visible - analysis may be inaccurate")
            }
            AnalysisBand::High => write!(f, "High confidence - Strong pothole characteristics detected"),
            AnalysisBand::Medium => write!(f, "Medium confidence - Possible pothole detected"),
            AnalysisBand::Low => write!(f, "Low confidence - Minor irregularities found"),
            AnalysisBand::VeryLow => write!(f, "Very low confidence - Minimal pothole indicators"),
            AnalysisBand::Clear => write!(f, "Clear road - No significant pothole features detected"),
        }
    }
}

impl AnalysisBand {
    /// A thin road surface overrides every confidence band.
    pub fn get_band(confidence: f64, road_ratio: f64) -> Self {
        if road_ratio < ROAD_SURFACE_THRESHOLD {
            return AnalysisBand::LimitedSurface;
        }

        if confidence > 0.7 {
            AnalysisBand::High
        } else if confidence > 0.5 {
            AnalysisBand::Medium
        } else if confidence > 0.3 {
            AnalysisBand::Low
        } else if confidence > 0.1 {
            AnalysisBand::VeryLow
        } else {
            AnalysisBand::Clear
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    GoodRoad,
    PartialRoad,
    NonRoad,
}

impl Display for ImageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageType::GoodRoad => write!(f, "good-road"),
            ImageType::PartialRoad => write!(f, "partial-road"),
            ImageType::NonRoad => write!(f, "non-road"),
        }
    }
}

impl ImageType {
    pub fn get_type(road_ratio: f64) -> Self {
        if road_ratio > 0.6 {
            ImageType::GoodRoad
        } else if road_ratio > ROAD_SURFACE_THRESHOLD {
            ImageType::PartialRoad
        } else {
            ImageType::NonRoad
        }
    }
}

/// What the reporter should do next.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Recommendation {
    UploadRoadPhoto,
    Report { clusters: usize },
    Review,
    Minor,
    NoAction,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::UploadRoadPhoto => write!(
                f,
                "Please upload a clear photo of a road surface for accurate pothole detection."
            ),
            Recommendation::Report { clusters } => write!(
                f,
                "Strong evidence of {} potential pothole(s). Consider reporting.",
                clusters
            ),
            Recommendation::Review => {
                write!(f, "Possible road damage detected. Review carefully before reporting.")
            }
            Recommendation::Minor => {
                write!(f, "Minor irregularities found. May not require immediate attention.")
            }
            Recommendation::NoAction => {
                write!(f, "Road appears to be in good condition. No action needed.")
            }
        }
    }
}

impl Recommendation {
    pub fn get_recommendation(confidence: f64, clusters: usize) -> Self {
        if confidence > 0.6 {
            Recommendation::Report { clusters }
        } else if confidence > 0.4 {
            Recommendation::Review
        } else if confidence > 0.2 {
            Recommendation::Minor
        } else {
            Recommendation::NoAction
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_bands_are_strict() {
        assert_eq!(AnalysisBand::get_band(0.71, 1.0), AnalysisBand::High);
        assert_eq!(AnalysisBand::get_band(0.7, 1.0), AnalysisBand::Medium);
        assert_eq!(AnalysisBand::get_band(0.5, 1.0), AnalysisBand::Low);
        assert_eq!(AnalysisBand::get_band(0.3, 1.0), AnalysisBand::VeryLow);
        assert_eq!(AnalysisBand::get_band(0.1, 1.0), AnalysisBand::Clear);
        assert_eq!(AnalysisBand::get_band(0.05, 1.0), AnalysisBand::Clear);
    }

    #[test]
    fn limited_surface_overrides_confidence() {
        assert_eq!(AnalysisBand::get_band(0.95, 0.29), AnalysisBand::LimitedSurface);
        assert_eq!(AnalysisBand::get_band(0.95, 0.3), AnalysisBand::High);
    }

    #[test]
    fn image_type_tags() {
        assert_eq!(ImageType::get_type(0.61).to_string(), "good-road");
        assert_eq!(ImageType::get_type(0.6).to_string(), "partial-road");
        assert_eq!(ImageType::get_type(0.31).to_string(), "partial-road");
        assert_eq!(ImageType::get_type(0.3).to_string(), "non-road");
    }

    #[test]
    fn recommendations() {
        assert_eq!(
            Recommendation::get_recommendation(0.8, 3).to_string(),
            "Strong evidence of 3 potential pothole(s). Consider reporting."
        );
        assert_eq!(Recommendation::get_recommendation(0.6, 3), Recommendation::Review);
        assert_eq!(Recommendation::get_recommendation(0.4, 3), Recommendation::Minor);
        assert_eq!(Recommendation::get_recommendation(0.2, 3), Recommendation::NoAction);
    }
}
