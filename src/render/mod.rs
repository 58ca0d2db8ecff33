//! Compositing.
//!
//! A scene is first lowered to a [`plan::DrawPlan`] (a flat list of draws in painter's order),
//! then executed by a [`passes::DrawBackend`]. The CPU backend lives in [`cpu`].

/// Output surface and render settings.
pub mod backend;
/// `vello_cpu` compositor.
pub mod cpu;
/// Backend trait and plan execution.
pub mod passes;
/// Scene-to-draw-list lowering.
pub mod plan;
/// Drop shadow rasters.
pub mod shadow;
