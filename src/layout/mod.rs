//! Layout registry.

/// Built-in layout templates and slot geometry.
pub mod template;
