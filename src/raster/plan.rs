use serde::{Deserialize, Serialize};

/// The result of planning a raster query: the grid of tile image names to
/// stitch, the exact geographic bounds that grid covers, and the depth it
/// was taken from.
///
/// `render_grid` is row-major, north-to-south then west-to-east, so the
/// front end can paste tiles in iteration order. The `raster_*` bounds
/// may be larger than the requested box (tiles snap to the pyramid grid)
/// but always contain it. Serialized field names are the wire contract of
/// the map response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterPlan {
    pub render_grid: Vec<Vec<String>>,
    pub raster_ul_lon: f64,
    pub raster_ul_lat: f64,
    pub raster_lr_lon: f64,
    pub raster_lr_lat: f64,
    pub depth: u8,
    pub query_success: bool,
}

impl RasterPlan {
    /// The failure payload: empty grid, zeroed bounds,
    /// `query_success = false`. Boundary layers that must always answer
    /// with a full result shape send this when planning fails.
    pub fn failed() -> Self {
        Self {
            render_grid: Vec::new(),
            raster_ul_lon: 0.0,
            raster_ul_lat: 0.0,
            raster_lr_lon: 0.0,
            raster_lr_lat: 0.0,
            depth: 0,
            query_success: false,
        }
    }

    /// Grid size as (columns, rows)
    pub fn grid_size(&self) -> (usize, usize) {
        let rows = self.render_grid.len();
        let cols = self.render_grid.first().map_or(0, |row| row.len());
        (cols, rows)
    }
}
