//! Export encoding.

/// Lossless PNG encoding of rendered composites.
pub mod png;
