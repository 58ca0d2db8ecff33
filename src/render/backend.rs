/// A rendered composite as RGBA8 pixels.
///
/// Surfaces are **premultiplied alpha**; the flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl Surface {
    /// Pixel at `(x, y)` as stored, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

const CACHE_CAPACITY_ENV: &str = "DEEPBOOTH_SVG_CACHE_CAPACITY";

/// Compositor settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Draw the soft drop shadows behind postcard photos and decorations.
    pub shadows: bool,
    /// Decode photos and rasterize decorations on the rayon pool.
    pub parallel_decode: bool,
    /// Number of `(decoration, size)` rasters kept between renders.
    pub sticker_cache_capacity: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            shadows: true,
            parallel_decode: true,
            sticker_cache_capacity: 64,
        }
    }
}

impl RenderSettings {
    /// Defaults, with the cache capacity overridable through
    /// `DEEPBOOTH_SVG_CACHE_CAPACITY`.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(n) = std::env::var(CACHE_CAPACITY_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            settings.sticker_cache_capacity = n;
        }
        settings
    }
}
