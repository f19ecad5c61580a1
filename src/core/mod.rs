pub mod geo;
pub mod pyramid;

// Re-exports for convenience
pub use geo::{GeoBounds, TileCoord};
pub use pyramid::TilePyramid;
