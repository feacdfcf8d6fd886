use crate::detect::{DARK_THRESHOLD, MIN_POTHOLE_SIZE};
use bitvec::prelude::BitVec;
use log::trace;
use roadscan_media::PixelBuffer;
use std::ops::{Deref, DerefMut};

const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Flat pixel indices of one 8-connected dark region.
#[derive(Debug, Clone, Default)]
pub struct Cluster(Vec<usize>);

impl Deref for Cluster {
    type Target = Vec<usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The dark clusters large enough to be pothole candidates.
#[derive(Debug, Clone, Default)]
pub struct DarkRegions(Vec<Cluster>);

impl Deref for DarkRegions {
    type Target = Vec<Cluster>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DarkRegions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DarkRegions {
    /// Seeds a flood fill from every unvisited dark interior pixel, row-major.
    /// A fill may grow onto the border rows and columns; only seeding skips them.
    /// Clusters smaller than the minimum size are dropped.
    pub fn segment(buffer: &PixelBuffer<'_>) -> Self {
        let mut regions = DarkRegions(Vec::new());
        let (width, height) = buffer.get_size();
        if width < 3 || height < 3 {
            return regions;
        }

        let mut visited: BitVec = BitVec::repeat(false, buffer.pixel_count());
        let mut stack = Vec::new();
        let mut discarded = 0usize;

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let index = y as usize * width as usize + x as usize;
                if visited[index] || !is_dark(buffer, index) {
                    continue;
                }

                let cluster = flood_fill(buffer, index, &mut visited, &mut stack);
                if cluster.len() >= MIN_POTHOLE_SIZE {
                    regions.push(cluster);
                } else {
                    discarded += 1;
                }
            }
        }

        trace!(
            "Segmented {} qualifying dark clusters, discarded {} small ones",
            regions.len(),
            discarded
        );
        regions
    }
}

#[inline]
fn is_dark(buffer: &PixelBuffer<'_>, index: usize) -> bool {
    buffer.pixel(index).brightness() < DARK_THRESHOLD
}

/// Iterative 8-connected fill. Every pixel the fill examines is marked
/// visited, dark or not, and enters the stack at most once.
fn flood_fill(
    buffer: &PixelBuffer<'_>,
    seed: usize,
    visited: &mut BitVec,
    stack: &mut Vec<usize>,
) -> Cluster {
    let width = buffer.width() as i64;
    let height = buffer.height() as i64;
    let mut cluster = Vec::new();

    stack.clear();
    visited.set(seed, true);
    stack.push(seed);

    while let Some(index) = stack.pop() {
        if !is_dark(buffer, index) {
            continue;
        }
        cluster.push(index);

        let x = index as i64 % width;
        let y = index as i64 / width;
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                continue;
            }

            let neighbor = (ny * width + nx) as usize;
            if !visited[neighbor] {
                visited.set(neighbor, true);
                stack.push(neighbor);
            }
        }
    }

    Cluster(cluster)
}
