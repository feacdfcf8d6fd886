use serde::Serialize;

/// Everything the scorer looks at, extracted from one photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    pub road_surface_ratio: f64,
    pub qualifying_cluster_count: usize,
    pub dark_pixel_ratio: f64,
    pub strong_edge_count: usize,
}
