//! Scene model: photos, placements and the JSON scene file.

/// Scene types.
pub mod model;
