use crate::{
    assets::decode::PreparedImage,
    foundation::{
        core::Rect,
        error::{BoothError, BoothResult},
        math::gaussian_coverage,
    },
    render::plan::ShadowStyle,
};

/// Black, premultiplied shadow coverage positioned in some pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowRaster {
    /// Left edge of the raster in the target pixel space.
    pub origin_x: i32,
    /// Top edge of the raster in the target pixel space.
    pub origin_y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 (color channels are always zero).
    pub rgba8_premul: Vec<u8>,
}

impl ShadowRaster {
    /// Alpha at `(x, y)` in raster-local pixels.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.rgba8_premul[((y as usize) * (self.width as usize) + (x as usize)) * 4 + 3]
    }
}

/// Shadow of an opaque axis-aligned rectangle, clipped to `clip`.
///
/// A Gaussian-blurred box is separable, so each pixel's coverage is the product of the
/// horizontal and vertical erf profiles. Returns `None` when nothing lands inside `clip`.
pub fn rect_shadow(rect: Rect, style: &ShadowStyle, clip: Rect) -> Option<ShadowRaster> {
    let subject = rect + style.offset;
    let spread = f64::from(style.spread_px());
    let bounds = Rect::new(
        (subject.x0 - spread).floor(),
        (subject.y0 - spread).floor(),
        (subject.x1 + spread).ceil(),
        (subject.y1 + spread).ceil(),
    )
    .intersect(clip.round());
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return None;
    }

    let (x0, y0) = (bounds.x0 as i32, bounds.y0 as i32);
    let (width, height) = (bounds.width() as u32, bounds.height() as u32);
    let sigma = style.sigma();

    let fx: Vec<f64> = (0..width)
        .map(|i| gaussian_coverage(subject.x0, subject.x1, f64::from(x0) + f64::from(i) + 0.5, sigma))
        .collect();
    let fy: Vec<f64> = (0..height)
        .map(|j| gaussian_coverage(subject.y0, subject.y1, f64::from(y0) + f64::from(j) + 0.5, sigma))
        .collect();

    let peak = f64::from(style.opacity.clamp(0.0, 1.0)) * 255.0;
    let mut rgba8_premul = vec![0u8; (width as usize) * (height as usize) * 4];
    for (row, &cy) in rgba8_premul
        .chunks_exact_mut((width as usize) * 4)
        .zip(fy.iter())
    {
        for (px, &cx) in row.chunks_exact_mut(4).zip(fx.iter()) {
            px[3] = (peak * cx * cy).round().clamp(0.0, 255.0) as u8;
        }
    }

    Some(ShadowRaster {
        origin_x: x0,
        origin_y: y0,
        width,
        height,
        rgba8_premul,
    })
}

/// Shadow of an arbitrary raster's coverage, in the raster's own pixel space.
///
/// The result is padded by the style's spread on every side, so its origin is
/// `(-spread, -spread)`. The style's offset is not applied here.
pub fn coverage_shadow(src: &PreparedImage, style: &ShadowStyle) -> BoothResult<ShadowRaster> {
    let pad = style.spread_px();
    let width = src.width + 2 * pad;
    let height = src.height + 2 * pad;

    let mut alpha = vec![0u8; (width as usize) * (height as usize)];
    for (y, row) in src
        .rgba8_premul
        .chunks_exact((src.width as usize) * 4)
        .enumerate()
    {
        let dst_row = (y + pad as usize) * (width as usize) + pad as usize;
        for (x, px) in row.chunks_exact(4).enumerate() {
            alpha[dst_row + x] = px[3];
        }
    }

    let kernel = gaussian_kernel_q16(pad, style.sigma() as f32)?;
    let mut tmp = vec![0u8; alpha.len()];
    let mut blurred = vec![0u8; alpha.len()];
    blur_alpha_q16(&alpha, &mut blurred, &mut tmp, width, height, &kernel);

    let op = (style.opacity.clamp(0.0, 1.0) * 255.0).round() as u16;
    let mut rgba8_premul = vec![0u8; alpha.len() * 4];
    for (px, &a) in rgba8_premul.chunks_exact_mut(4).zip(blurred.iter()) {
        px[3] = crate::foundation::math::mul_div255_u8(u16::from(a), op);
    }

    Ok(ShadowRaster {
        origin_x: -(pad as i32),
        origin_y: -(pad as i32),
        width,
        height,
        rgba8_premul,
    })
}

/// Normalized Gaussian weights in Q16 fixed point; the taps always sum to exactly `1 << 16`.
pub(crate) fn gaussian_kernel_q16(radius: u32, sigma: f32) -> BoothResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BoothError::validation("blur sigma must be finite and > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn blur_alpha_q16(src: &[u8], dst: &mut [u8], tmp: &mut [u8], width: u32, height: u32, k: &[u32]) {
    if k.len() == 1 {
        dst.copy_from_slice(src);
        return;
    }
    let (w, h) = (width as usize, height as usize);
    let radius = (k.len() / 2) as isize;

    // Taps outside the buffer read as zero coverage.
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sx = x as isize + ki as isize - radius;
                if sx >= 0 && (sx as usize) < w {
                    acc += u64::from(kw) * u64::from(src[y * w + sx as usize]);
                }
            }
            tmp[y * w + x] = q16_to_u8(acc);
        }
    }
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sy = y as isize + ki as isize - radius;
                if sy >= 0 && (sy as usize) < h {
                    acc += u64::from(kw) * u64::from(tmp[sy as usize * w + x]);
                }
            }
            dst[y * w + x] = q16_to_u8(acc);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/shadow.rs"]
mod tests;
