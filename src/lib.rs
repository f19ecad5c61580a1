//! # Tileplan
//!
//! Viewport-driven tile selection for pre-rendered map tile pyramids.
//!
//! Given a geographic bounding box and a pixel viewport size, this library
//! picks the tile depth (zoom level) and the rectangular grid of tile
//! coordinates that cover the requested area at sufficient resolution, and
//! reports the exact geographic bounds the chosen grid spans. It is the
//! pure planning half of a raster map server: the HTTP layer and the
//! front-end that stitches the named tiles into one image live elsewhere.
//!
//! The whole computation is a synchronous pure function over immutable
//! inputs and is safe to call from any number of threads.
//!
//! ```
//! use tileplan::{select_tiles, RasterQuery, TilePyramid};
//!
//! let pyramid = TilePyramid::berkeley_sample();
//! let query = RasterQuery {
//!     ullon: -122.2998046875,
//!     ullat: 37.892195547244356,
//!     lrlon: -122.2119140625,
//!     lrlat: 37.82280243352756,
//!     w: 256.0,
//!     h: 256.0,
//! };
//! let plan = select_tiles(&pyramid, &query).unwrap();
//! assert_eq!(plan.depth, 0);
//! assert_eq!(plan.render_grid, vec![vec!["d0_x0_y0.png".to_string()]]);
//! ```

pub mod core;
pub mod raster;

// Re-export public API
pub use crate::core::{
    geo::{GeoBounds, TileCoord},
    pyramid::TilePyramid,
};
pub use crate::raster::{plan::RasterPlan, query::RasterQuery, selector::select_tiles};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors produced while validating or planning a raster query
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RasterError {
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("invalid query box: {0}")]
    InvalidBox(String),

    #[error("query box {0} lies entirely outside the pyramid root extent")]
    OutOfBounds(String),
}
