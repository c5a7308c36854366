//! `atlas-gridmap` – traversable-area maps from bitmap images.
//!
//! Turns a hand-drawn or exported field bitmap into the boolean
//! [`OccupancyGrid`][raster::OccupancyGrid] the pathfinding consumer walks
//! over. Rasterization happens once at configuration-build time; the
//! resulting grid is immutable.

pub mod raster;

pub use raster::OccupancyGrid;
