use std::{io::Cursor, path::Path};

use base64::Engine as _;

use crate::{
    assets::decode::unpremultiply_rgba8_in_place,
    foundation::error::{BoothError, BoothResult},
    render::backend::Surface,
};

/// A composite encoded as lossless PNG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedComposite {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    png: Vec<u8>,
}

impl EncodedComposite {
    /// Raw PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Consume and return the PNG bytes.
    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// `data:image/png;base64,...` URI suitable for download links and print previews.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }

    /// Write the PNG to `path`, replacing any existing file.
    #[tracing::instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn write_png(&self, path: impl AsRef<Path>) -> BoothResult<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.png)
            .map_err(|e| BoothError::storage(format!("write '{}': {e}", path.display())))
    }
}

/// Encode `surface` as an 8-bit RGBA PNG.
///
/// Premultiplied surfaces are converted to straight alpha first, so fully opaque pixels
/// round-trip exactly.
pub fn encode_png(surface: &Surface) -> BoothResult<EncodedComposite> {
    let expected = (surface.width as usize)
        .checked_mul(surface.height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| BoothError::encode("surface dimensions overflow"))?;
    if surface.width == 0 || surface.height == 0 {
        return Err(BoothError::encode("surface has zero width or height"));
    }
    if surface.data.len() != expected {
        return Err(BoothError::encode(format!(
            "surface byte length {} does not match {}x{}",
            surface.data.len(),
            surface.width,
            surface.height
        )));
    }

    let mut straight = surface.data.clone();
    if surface.premultiplied {
        unpremultiply_rgba8_in_place(&mut straight);
    }

    let img = image::RgbaImage::from_raw(surface.width, surface.height, straight)
        .ok_or_else(|| BoothError::encode("surface buffer rejected by encoder"))?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| BoothError::encode(format!("png: {e}")))?;

    tracing::debug!(
        width = surface.width,
        height = surface.height,
        bytes = png.len(),
        "encoded png"
    );
    Ok(EncodedComposite {
        width: surface.width,
        height: surface.height,
        png,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
