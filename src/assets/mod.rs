//! Image loaders and the built-in decoration library.

/// Raster decode and SVG parsing.
pub mod decode;
/// Built-in vector decorations.
pub mod library;
/// SVG rasterization into square boxes.
pub mod svg_raster;
