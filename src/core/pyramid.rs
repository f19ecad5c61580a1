//! Description of a fixed multi-resolution tile set.
//!
//! A pyramid covers one root geographic extent. At depth `d` the root is
//! subdivided into `2^d × 2^d` equal tiles, so each depth increment halves
//! tile width and height. The pyramid is plain configuration data: hosts
//! construct one at startup (or deserialize it from their own config) and
//! pass it into the selector by reference.

use crate::core::geo::GeoBounds;
use serde::{Deserialize, Serialize};

/// Default square tile size in pixels
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// A fixed pyramid of pre-rendered tiles: root extent, maximum subdivision
/// depth, and the pixel size of a single tile image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilePyramid {
    pub root: GeoBounds,
    pub max_depth: u8,
    pub tile_size: u32,
}

impl TilePyramid {
    pub fn new(root: GeoBounds, max_depth: u8, tile_size: u32) -> Self {
        Self {
            root,
            max_depth,
            tile_size,
        }
    }

    /// The pyramid shipped with the UC Berkeley sample tile set: an
    /// 8-level pyramid of 256 px tiles over the Berkeley area.
    pub fn berkeley_sample() -> Self {
        Self::new(
            GeoBounds::new(
                -122.2998046875,
                37.892195547244356,
                -122.2119140625,
                37.82280243352756,
            ),
            7,
            DEFAULT_TILE_SIZE,
        )
    }

    /// Longitudinal distance per pixel of the single depth-0 tile
    pub fn root_lon_dpp(&self) -> f64 {
        self.root.width() / self.tile_size as f64
    }

    /// Number of tiles along each axis at `depth`
    pub fn tiles_across(&self, depth: u8) -> u32 {
        1u32 << depth
    }

    /// Tile width in degrees of longitude at `depth`
    pub fn tile_width(&self, depth: u8) -> f64 {
        self.root.width() / 2_f64.powi(depth as i32)
    }

    /// Tile height in degrees of latitude at `depth`
    pub fn tile_height(&self, depth: u8) -> f64 {
        self.root.height() / 2_f64.powi(depth as i32)
    }

    /// Picks the depth whose tiles satisfy a requested longitudinal
    /// distance per pixel.
    ///
    /// The result is the smallest depth whose lonDPP is less than or equal
    /// to `lon_dpp` (rounding up the fractional ideal depth), clamped to
    /// `[0, max_depth]`: queries finer than the pyramid can serve get
    /// `max_depth`, queries coarser than the root tile get 0.
    pub fn depth_for_lon_dpp(&self, lon_dpp: f64) -> u8 {
        let d = (self.root_lon_dpp() / lon_dpp).log2();
        if d > self.max_depth as f64 {
            self.max_depth
        } else if d < 0.0 {
            0
        } else {
            d.ceil() as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_root_lon_dpp() {
        let pyramid = TilePyramid::berkeley_sample();
        assert_eq!(pyramid.root_lon_dpp(), 0.00034332275390625);
    }

    #[test]
    fn test_tile_size_halves_per_depth() {
        let pyramid = TilePyramid::berkeley_sample();
        for depth in 0..pyramid.max_depth {
            assert_eq!(
                pyramid.tile_width(depth) / 2.0,
                pyramid.tile_width(depth + 1)
            );
            assert_eq!(
                pyramid.tile_height(depth) / 2.0,
                pyramid.tile_height(depth + 1)
            );
        }
        assert_eq!(pyramid.tiles_across(0), 1);
        assert_eq!(pyramid.tiles_across(7), 128);
    }

    #[test]
    fn test_depth_clamps_to_max() {
        let pyramid = TilePyramid::berkeley_sample();
        // Far finer than depth 7 can serve
        assert_eq!(pyramid.depth_for_lon_dpp(1e-12), 7);
    }

    #[test]
    fn test_depth_clamps_to_zero() {
        let pyramid = TilePyramid::berkeley_sample();
        // Far coarser than the root tile
        assert_eq!(pyramid.depth_for_lon_dpp(1.0), 0);
    }

    #[test]
    fn test_depth_rounds_up() {
        let pyramid = TilePyramid::berkeley_sample();
        let root = pyramid.root_lon_dpp();
        // Slightly finer than depth 2 serves: must round up to 3
        assert_eq!(pyramid.depth_for_lon_dpp(root / 4.0 * 0.99), 3);
        // Exactly depth 2 resolution stays at 2
        assert_eq!(pyramid.depth_for_lon_dpp(root / 4.0), 2);
    }

    #[test]
    fn test_exact_root_resolution_is_depth_zero() {
        let pyramid = TilePyramid::berkeley_sample();
        assert_eq!(pyramid.depth_for_lon_dpp(pyramid.root_lon_dpp()), 0);
    }
}
