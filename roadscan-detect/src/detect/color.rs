use roadscan_media::RGB;

/// One road surface material, matched by inclusive per-channel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub name: &'static str,
    pub min: RGB,
    pub max: RGB,
}

impl ColorRange {
    pub const fn new(name: &'static str, min: RGB, max: RGB) -> Self {
        ColorRange { name, min, max }
    }

    #[inline]
    pub fn contains(&self, r: u8, g: u8, b: u8) -> bool {
        r >= self.min.0
            && r <= self.max.0
            && g >= self.min.1
            && g <= self.max.1
            && b >= self.min.2
            && b <= self.max.2
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RoadColorCatalog {
    ranges: &'static [ColorRange],
}

/// Asphalt, concrete and reddish brick, in match order.
pub const ROAD_COLOR_CATALOG: RoadColorCatalog = RoadColorCatalog::new(&[
    // dark gray to medium gray
    ColorRange::new("asphalt", RGB(30, 30, 30), RGB(120, 120, 120)),
    // light gray to white
    ColorRange::new("concrete", RGB(150, 150, 150), RGB(220, 220, 220)),
    ColorRange::new("red_brick", RGB(100, 30, 30), RGB(180, 80, 80)),
]);

impl Default for RoadColorCatalog {
    fn default() -> Self {
        ROAD_COLOR_CATALOG
    }
}

impl RoadColorCatalog {
    pub const fn new(ranges: &'static [ColorRange]) -> Self {
        RoadColorCatalog { ranges }
    }

    pub fn ranges(&self) -> &'static [ColorRange] {
        self.ranges
    }

    pub fn is_road_color(&self, r: u8, g: u8, b: u8) -> bool {
        self.ranges.iter().any(|range| range.contains(r, g, b))
    }

    /// First material in catalog order whose bounds contain the sample.
    pub fn matching_surface(&self, r: u8, g: u8, b: u8) -> Option<&'static ColorRange> {
        self.ranges.iter().find(|range| range.contains(r, g, b))
    }
}
