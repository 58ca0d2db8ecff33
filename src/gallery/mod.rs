//! Archive of exported composites.

/// Directory-backed gallery.
pub mod store;
