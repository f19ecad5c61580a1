use serde::{Deserialize, Serialize};

/// A geographic bounding box described by its upper-left and lower-right
/// corners, in degrees. Longitude increases eastward, latitude northward,
/// so a well-formed box has `ul_lon < lr_lon` and `ul_lat > lr_lat`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub ul_lon: f64,
    pub ul_lat: f64,
    pub lr_lon: f64,
    pub lr_lat: f64,
}

impl GeoBounds {
    /// Creates a new bounding box from upper-left and lower-right corners
    pub fn new(ul_lon: f64, ul_lat: f64, lr_lon: f64, lr_lat: f64) -> Self {
        Self {
            ul_lon,
            ul_lat,
            lr_lon,
            lr_lat,
        }
    }

    /// Longitudinal span in degrees
    pub fn width(&self) -> f64 {
        self.lr_lon - self.ul_lon
    }

    /// Latitudinal span in degrees
    pub fn height(&self) -> f64 {
        self.ul_lat - self.lr_lat
    }

    /// Longitudinal distance per pixel when this box is displayed in a
    /// viewport `width_px` pixels wide
    pub fn lon_dpp(&self, width_px: f64) -> f64 {
        self.width() / width_px
    }

    /// All four coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.ul_lon.is_finite()
            && self.ul_lat.is_finite()
            && self.lr_lon.is_finite()
            && self.lr_lat.is_finite()
    }

    /// Upper-left corner lies strictly north-west of the lower-right one
    pub fn is_well_formed(&self) -> bool {
        self.ul_lon < self.lr_lon && self.ul_lat > self.lr_lat
    }

    /// Checks if the box overlaps another box in both axes.
    /// Boxes that merely touch along an edge do not count as overlapping.
    pub fn intersects(&self, other: &GeoBounds) -> bool {
        self.ul_lon < other.lr_lon
            && other.ul_lon < self.lr_lon
            && self.lr_lat < other.ul_lat
            && other.lr_lat < self.ul_lat
    }

    /// Checks if the box fully contains another box
    pub fn contains(&self, other: &GeoBounds) -> bool {
        self.ul_lon <= other.ul_lon
            && self.ul_lat >= other.ul_lat
            && self.lr_lon >= other.lr_lon
            && self.lr_lat <= other.lr_lat
    }
}

/// A tile address within a pyramid: depth (zoom level) plus integer grid
/// indices. `x` counts west-to-east, `y` north-to-south, both from the
/// root upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub depth: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, depth: u8) -> Self {
        Self { x, y, depth }
    }

    /// Renders the tile image file name, e.g. `d7_x86_y30.png`. The file
    /// itself is an external pre-rendered asset addressed by convention;
    /// this library never reads it.
    pub fn filename(&self) -> String {
        format!("d{}_x{}_y{}.png", self.depth, self.x, self.y)
    }

    /// Checks if the indices fit the grid at this tile's depth
    pub fn is_valid(&self) -> bool {
        let max_coord = 1u32 << self.depth;
        self.x < max_coord && self.y < max_coord
    }
}
