use crate::detect::color::RoadColorCatalog;
use crate::detect::DARK_THRESHOLD;
use roadscan_media::PixelBuffer;

/// Counts gathered in the single full-buffer pass that precedes segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceScan {
    pub road_pixels: usize,
    pub dark_pixels: usize,
    pub total_pixels: usize,
}

impl SurfaceScan {
    /// The caller guarantees the buffer is well formed.
    pub fn scan(buffer: &PixelBuffer<'_>, catalog: &RoadColorCatalog) -> Self {
        let mut road_pixels = 0;
        let mut dark_pixels = 0;

        for (_, _, rgb) in buffer.pixels() {
            if catalog.is_road_color(rgb.0, rgb.1, rgb.2) {
                road_pixels += 1;
            }
            if rgb.brightness() < DARK_THRESHOLD {
                dark_pixels += 1;
            }
        }

        SurfaceScan {
            road_pixels,
            dark_pixels,
            total_pixels: buffer.pixel_count(),
        }
    }

    pub fn road_ratio(&self) -> f64 {
        ratio(self.road_pixels, self.total_pixels)
    }

    pub fn dark_ratio(&self) -> f64 {
        ratio(self.dark_pixels, self.total_pixels)
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}
