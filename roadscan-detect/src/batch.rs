use crate::detect::property::detection_result::DetectionResult;
use crate::detect::PotholeDetector;
use crate::error::DetectResult;
use log::debug;
use rayon::prelude::*;
use roadscan_media::PixelBuffer;

impl PotholeDetector {
    /// One independent detection per buffer on the rayon pool, results in input order.
    pub fn detect_batch(&self, buffers: &[PixelBuffer<'_>]) -> Vec<DetectResult<DetectionResult>> {
        debug!("Running pothole detection on {} buffers", buffers.len());

        buffers
            .par_iter()
            .map(|buffer| self.detect(buffer))
            .collect()
    }
}

pub fn detect_batch(buffers: &[PixelBuffer<'_>]) -> Vec<DetectResult<DetectionResult>> {
    PotholeDetector::default().detect_batch(buffers)
}
