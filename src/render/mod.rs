pub mod document;
pub mod raster;
