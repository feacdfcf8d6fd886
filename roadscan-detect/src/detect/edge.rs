use crate::detect::segment::DarkRegions;
use crate::detect::EDGE_THRESHOLD;
use roadscan_media::PixelBuffer;

/// Local gradient check over the pixels of qualifying clusters.
///
/// Pothole rims are crisp, shadows fade out softly; the count of sharp
/// steps inside the dark regions is what separates the two.
pub struct EdgeAnalyzer<'a> {
    buffer: &'a PixelBuffer<'a>,
}

impl<'a> EdgeAnalyzer<'a> {
    pub fn new(buffer: &'a PixelBuffer<'a>) -> Self {
        EdgeAnalyzer { buffer }
    }

    /// Largest absolute brightness difference between a pixel and its eight
    /// neighbours. Border pixels have no full neighbourhood and report 0.
    pub fn gradient_at(&self, index: usize) -> f64 {
        let width = self.buffer.width() as usize;
        let height = self.buffer.height() as usize;
        let x = index % width;
        let y = index / width;
        if x < 1 || x >= width - 1 || y < 1 || y >= height - 1 {
            return 0.0;
        }

        let current = self.buffer.pixel(index).brightness();
        let mut max_gradient = 0.0f64;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if nx == x && ny == y {
                    continue;
                }
                let neighbor = self.buffer.pixel(ny * width + nx).brightness();
                max_gradient = max_gradient.max((current - neighbor).abs());
            }
        }

        max_gradient
    }

    pub fn count_strong_edges(&self, regions: &DarkRegions) -> usize {
        regions
            .iter()
            .flat_map(|cluster| cluster.iter())
            .filter(|&&index| self.gradient_at(index) > EDGE_THRESHOLD)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(width: u32, height: u32, value: impl Fn(u32, u32) -> u8) -> Vec<u8> {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = value(x, y);
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        data
    }

    #[test]
    fn gradient_takes_the_steepest_neighbour() {
        let data = rgba(3, 3, |x, y| if (x, y) == (2, 2) { 200 } else { 50 });
        let buffer = PixelBuffer::new(3, 3, &data);
        let analyzer = EdgeAnalyzer::new(&buffer);

        assert_eq!(analyzer.gradient_at(4), 150.0);
    }

    #[test]
    fn border_pixels_report_zero() {
        let data = rgba(3, 3, |x, _| if x == 0 { 0 } else { 255 });
        let buffer = PixelBuffer::new(3, 3, &data);
        let analyzer = EdgeAnalyzer::new(&buffer);

        for index in [0, 1, 2, 3, 5, 6, 7, 8] {
            assert_eq!(analyzer.gradient_at(index), 0.0);
        }
    }

    #[test]
    fn counts_rim_pixels_of_a_crisp_hole() {
        // 20x20 block at brightness 10 on brightness 80 road: only the
        // 76 rim pixels of the block see the road
        let data = rgba(40, 40, |x, y| {
            if (10..30).contains(&x) && (10..30).contains(&y) { 10 } else { 80 }
        });
        let buffer = PixelBuffer::new(40, 40, &data);
        let regions = DarkRegions::segment(&buffer);

        assert_eq!(regions.len(), 1);
        assert_eq!(EdgeAnalyzer::new(&buffer).count_strong_edges(&regions), 76);
    }

    #[test]
    fn step_of_exactly_the_threshold_is_not_strong() {
        let block = |level: u8| {
            rgba(40, 40, move |x, y| {
                if (10..30).contains(&x) && (10..30).contains(&y) { level } else { 60 }
            })
        };

        // 60 - 35 = 25: dark, but the step is not strictly above the threshold
        let data = block(35);
        let buffer = PixelBuffer::new(40, 40, &data);
        let regions = DarkRegions::segment(&buffer);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 400);
        assert_eq!(EdgeAnalyzer::new(&buffer).count_strong_edges(&regions), 0);

        // 60 - 34 = 26: every rim pixel counts
        let data = block(34);
        let buffer = PixelBuffer::new(40, 40, &data);
        let regions = DarkRegions::segment(&buffer);
        assert_eq!(regions.len(), 1);
        assert_eq!(EdgeAnalyzer::new(&buffer).count_strong_edges(&regions), 76);
    }

    #[test]
    fn soft_shadow_has_no_strong_edges() {
        // brightness ramps by 20 per column, never a step above 25
        let data = rgba(40, 40, |x, _| (x * 20).min(240) as u8);
        let buffer = PixelBuffer::new(40, 40, &data);
        let regions = DarkRegions::segment(&buffer);

        assert_eq!(regions.len(), 1);
        assert_eq!(EdgeAnalyzer::new(&buffer).count_strong_edges(&regions), 0);
    }
}
