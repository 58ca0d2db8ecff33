/// Frame color parsing.
pub mod color;
/// Geometry and pixel primitives.
pub mod core;
/// Error types.
pub mod error;
pub(crate) mod math;
