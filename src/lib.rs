// Library exports for testing
pub mod batch;
pub mod config;
pub mod constants;
pub mod logging;
pub mod raster;
pub mod render;
pub mod status;
