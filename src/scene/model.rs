use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::library::StickerKind,
    foundation::{
        color::FrameColor,
        error::{BoothError, BoothResult},
    },
    layout::template::LayoutKind,
};

/// Base edge length, in canvas pixels, of a decoration at `scale == 1`.
pub const STICKER_BASE_SIZE_PX: f64 = 150.0;

/// One captured exposure as encoded raster bytes (PNG, JPEG, ...).
///
/// An empty payload marks a slot that was never captured; the compositor skips it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PhotoFrame {
    bytes: Arc<[u8]>,
}

impl PhotoFrame {
    /// Wrap encoded image bytes.
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// A placeholder for a slot with no capture.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether this frame holds no capture.
    pub fn is_missing(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for PhotoFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoFrame")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A decoration instance placed on the canvas.
///
/// Field names follow the editor's sticker records (`type` for the decoration kind).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Editor-session identifier.
    pub id: String,
    /// Decoration kind identifier, resolved against the asset library at render time.
    #[serde(rename = "type")]
    pub kind: String,
    /// Center x as a percentage of canvas width.
    pub x: f64,
    /// Center y as a percentage of canvas height.
    pub y: f64,
    /// Uniform scale; `1.0` draws at [`STICKER_BASE_SIZE_PX`].
    #[serde(default = "one")]
    pub scale: f64,
    /// Clockwise rotation in degrees about the center.
    #[serde(default)]
    pub rotation: f64,
}

fn one() -> f64 {
    1.0
}

impl Placement {
    /// Placement of `kind` at `(x, y)` percent with unit scale and no rotation.
    pub fn new(id: impl Into<String>, kind: StickerKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind: kind.id().to_string(),
            x,
            y,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Builder-style scale setter.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Builder-style rotation setter (degrees).
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation = rotation_deg;
        self
    }

    /// Resolve the decoration kind.
    pub fn sticker_kind(&self) -> BoothResult<StickerKind> {
        self.kind.parse()
    }

    /// Edge length of the drawn decoration box in canvas pixels.
    pub fn box_side_px(&self) -> f64 {
        STICKER_BASE_SIZE_PX * self.scale
    }

    pub(crate) fn validate(&self) -> BoothResult<()> {
        for (name, v) in [
            ("x", self.x),
            ("y", self.y),
            ("scale", self.scale),
            ("rotation", self.rotation),
        ] {
            if !v.is_finite() {
                return Err(BoothError::validation(format!(
                    "placement '{}': {name} must be finite, got {v}",
                    self.id
                )));
            }
        }
        if self.scale <= 0.0 {
            return Err(BoothError::validation(format!(
                "placement '{}': scale must be > 0, got {}",
                self.id, self.scale
            )));
        }
        Ok(())
    }
}

/// Everything one composite render needs.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeScene {
    /// Layout identifier (`postcard` or `strips`).
    pub layout: String,
    /// Captured photos in capture order.
    pub photos: Vec<PhotoFrame>,
    /// Decorations in z-order, first drawn at the bottom.
    pub placements: Vec<Placement>,
    /// Background color as a hex string.
    pub frame_color: String,
}

impl CompositeScene {
    /// Empty scene for `layout` on a white frame.
    pub fn new(layout: LayoutKind) -> Self {
        Self {
            layout: layout.id().to_string(),
            photos: Vec::new(),
            placements: Vec::new(),
            frame_color: FrameColor::WHITE.to_hex(),
        }
    }

    /// Builder-style photo list setter.
    pub fn with_photos(mut self, photos: Vec<PhotoFrame>) -> Self {
        self.photos = photos;
        self
    }

    /// Builder-style placement list setter.
    pub fn with_placements(mut self, placements: Vec<Placement>) -> Self {
        self.placements = placements;
        self
    }

    /// Builder-style frame color setter.
    pub fn with_frame_color(mut self, color: impl Into<String>) -> Self {
        self.frame_color = color.into();
        self
    }
}

/// JSON form of a scene with photos referenced by path.
///
/// ```json
/// { "layout": "strips", "photos": ["a.jpg", null], "stickers": [], "frameColor": "#ffffff" }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFile {
    /// Layout identifier.
    pub layout: String,
    /// Photo paths relative to the scene file; `null` or `""` for a missing capture.
    #[serde(default)]
    pub photos: Vec<Option<String>>,
    /// Decorations in z-order.
    #[serde(default, alias = "placements")]
    pub stickers: Vec<Placement>,
    /// Background color.
    #[serde(default = "default_frame_color")]
    pub frame_color: String,
}

fn default_frame_color() -> String {
    FrameColor::WHITE.to_hex()
}

impl SceneFile {
    /// Parse a scene from JSON text.
    pub fn from_json_str(s: &str) -> BoothResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| BoothError::validation(format!("invalid scene json: {e}")))
    }

    /// Read and parse a scene JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> BoothResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Load photo bytes (relative paths resolved against `base_dir`) and build the scene.
    pub fn load(&self, base_dir: impl AsRef<Path>) -> BoothResult<CompositeScene> {
        let base_dir = base_dir.as_ref();
        let photos = self
            .photos
            .iter()
            .map(|p| -> BoothResult<PhotoFrame> {
                match p.as_deref() {
                    None | Some("") => Ok(PhotoFrame::missing()),
                    Some(rel) => {
                        let full: PathBuf = base_dir.join(rel);
                        let bytes = std::fs::read(&full)
                            .with_context(|| format!("read photo '{}'", full.display()))?;
                        Ok(PhotoFrame::new(bytes))
                    }
                }
            })
            .collect::<BoothResult<Vec<_>>>()?;

        Ok(CompositeScene {
            layout: self.layout.clone(),
            photos,
            placements: self.stickers.clone(),
            frame_color: self.frame_color.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
