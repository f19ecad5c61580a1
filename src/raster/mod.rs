pub mod plan;
pub mod query;
pub mod selector;

// Re-exports for convenience
pub use plan::RasterPlan;
pub use query::RasterQuery;
pub use selector::select_tiles;
