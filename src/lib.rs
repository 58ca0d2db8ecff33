//! deepbooth composites kiosk photobooth captures into print-ready images.
//!
//! A [`CompositeScene`] names a layout, carries the captured photos and the decorations the
//! guest placed, and picks a frame color. Rendering is deterministic:
//!
//! - Resolve the layout template and parse the frame color
//! - Decode photos and rasterize decorations (in parallel)
//! - Draw background, photos and decorations in fixed order
//! - Encode the result as PNG, optionally archiving it in a [`GalleryStore`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Image loaders and the decoration library.
pub mod assets;
/// PNG export.
pub mod encode;
mod foundation;
/// Archive of exported composites.
pub mod gallery;
/// Layout registry.
pub mod layout;
/// Compositing.
pub mod render;
/// Scene model.
pub mod scene;

pub use crate::foundation::color::FrameColor;
pub use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{BoothError, BoothResult};

pub use crate::assets::library::{StickerKind, svg_source};
pub use crate::encode::png::{EncodedComposite, encode_png};
pub use crate::gallery::store::{GalleryStore, SavedPhoto};
pub use crate::layout::template::{LayoutKind, LayoutTemplate, resolve_layout};
pub use crate::render::backend::{RenderSettings, Surface};
pub use crate::render::cpu::{Compositor, RenderedComposite, render_composite};
pub use crate::scene::model::{CompositeScene, PhotoFrame, Placement, SceneFile};
