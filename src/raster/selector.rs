//! The tile selector: turns a viewport query into a raster plan.
//!
//! Depth is chosen from the requested longitudinal distance per pixel
//! (LonDPP): the smallest depth whose tiles are at least as sharp as the
//! viewport needs, clamped to the pyramid's depth range. The tile index
//! range is then the floor/ceil projection of the query box edges onto
//! the grid at that depth, which by construction covers every tile the
//! box touches.

use crate::core::geo::TileCoord;
use crate::core::pyramid::TilePyramid;
use crate::raster::plan::RasterPlan;
use crate::raster::query::RasterQuery;
use crate::{RasterError, Result};

/// Plans the tile grid covering `query` against `pyramid`.
///
/// Fails fast on malformed input ([`RasterError::InvalidViewport`],
/// [`RasterError::InvalidBox`]) and on boxes entirely outside the root
/// extent ([`RasterError::OutOfBounds`]). Boxes partially overhanging the
/// root extent are clipped to the pyramid's valid index range, so the
/// returned grid never names a tile that does not exist.
///
/// Pure and deterministic: identical inputs produce identical plans.
pub fn select_tiles(pyramid: &TilePyramid, query: &RasterQuery) -> Result<RasterPlan> {
    log::debug!("raster query: {:?}", query);
    query.validate()?;

    let requested = query.bounds();
    let root = pyramid.root;
    if !root.intersects(&requested) {
        return Err(RasterError::OutOfBounds(format!("{:?}", requested)));
    }

    let depth = pyramid.depth_for_lon_dpp(query.lon_dpp());
    let tile_w = pyramid.tile_width(depth);
    let tile_h = pyramid.tile_height(depth);
    let tiles_across = pyramid.tiles_across(depth) as i64;

    // Half-open index range [x1, x2) x [y1, y2) of every tile the query
    // box touches, clipped to the valid range at this depth. The
    // intersection check above guarantees the clipped range is non-empty.
    let x1 = (((query.ullon - root.ul_lon) / tile_w).floor() as i64).clamp(0, tiles_across);
    let x2 = (((query.lrlon - root.ul_lon) / tile_w).ceil() as i64).clamp(0, tiles_across);
    let y1 = (((root.ul_lat - query.ullat) / tile_h).floor() as i64).clamp(0, tiles_across);
    let y2 = (((root.ul_lat - query.lrlat) / tile_h).ceil() as i64).clamp(0, tiles_across);

    // Row-major, north-to-south then west-to-east, so the front end can
    // paste tiles in iteration order.
    let mut render_grid = Vec::with_capacity((y2 - y1) as usize);
    for y in y1..y2 {
        let mut row = Vec::with_capacity((x2 - x1) as usize);
        for x in x1..x2 {
            row.push(TileCoord::new(x as u32, y as u32, depth).filename());
        }
        render_grid.push(row);
    }
    log::debug!(
        "selected depth {} grid {}x{} at x [{}, {}) y [{}, {})",
        depth,
        x2 - x1,
        y2 - y1,
        x1,
        x2,
        y1,
        y2
    );

    // Map the index range back to coordinates: the exact bounds of the
    // returned grid, a superset of the requested box for in-extent queries.
    Ok(RasterPlan {
        render_grid,
        raster_ul_lon: root.ul_lon + x1 as f64 * tile_w,
        raster_ul_lat: root.ul_lat - y1 as f64 * tile_h,
        raster_lr_lon: root.ul_lon + x2 as f64 * tile_w,
        raster_lr_lat: root.ul_lat - y2 as f64 * tile_h,
        depth,
        query_success: true,
    })
}
