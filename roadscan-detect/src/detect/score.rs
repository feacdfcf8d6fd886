use crate::detect::property::feature_set::FeatureSet;

const MAX_SURFACE_TERM: f64 = 0.2;
const MAX_CLUSTER_TERM: f64 = 0.4;
const MAX_DARK_TERM: f64 = 0.2;
const MAX_EDGE_TERM: f64 = 0.2;

const LOW_ROAD_RATIO: f64 = 0.1;
const LOW_ROAD_PENALTY: f64 = 0.3;
const NOISY_CLUSTER_COUNT: usize = 10;
const NOISY_CLUSTER_PENALTY: f64 = 0.7;

pub(crate) const MIN_CONFIDENCE: f64 = 0.05;
pub(crate) const MAX_CONFIDENCE: f64 = 0.95;

/// The four additive terms of the confidence, each already capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTerms {
    pub surface: f64,
    pub clusters: f64,
    pub dark: f64,
    pub edges: f64,
}

impl ScoreTerms {
    pub fn sum(&self) -> f64 {
        self.surface + self.clusters + self.dark + self.edges
    }
}

impl FeatureSet {
    /// Strong edges per hundred cluster pixels' worth of clusters; 0 without clusters.
    pub fn edge_density(&self) -> f64 {
        if self.qualifying_cluster_count == 0 {
            return 0.0;
        }
        self.strong_edge_count as f64 / (self.qualifying_cluster_count as f64 * 100.0)
    }

    pub fn score_terms(&self) -> ScoreTerms {
        ScoreTerms {
            surface: (self.road_surface_ratio * 0.2).min(MAX_SURFACE_TERM),
            clusters: (self.qualifying_cluster_count as f64 * 0.1).min(MAX_CLUSTER_TERM),
            dark: (self.dark_pixel_ratio * 2.0).min(MAX_DARK_TERM),
            edges: (self.edge_density() * 0.5).min(MAX_EDGE_TERM),
        }
    }

    /// Final pothole confidence, always inside `[0.05, 0.95]`.
    pub fn confidence(&self) -> f64 {
        let mut confidence = self.score_terms().sum();

        if self.road_surface_ratio < LOW_ROAD_RATIO {
            confidence *= LOW_ROAD_PENALTY;
        }
        if self.qualifying_cluster_count > NOISY_CLUSTER_COUNT {
            confidence *= NOISY_CLUSTER_PENALTY;
        }

        confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }
}
