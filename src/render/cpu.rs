use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use rayon::prelude::*;

use crate::{
    assets::{
        decode::{PreparedImage, decode_image},
        library::StickerKind,
        svg_raster::rasterize_sticker,
    },
    encode::png::{EncodedComposite, encode_png},
    foundation::{
        color::FrameColor,
        core::{Affine, Rect, Vec2},
        error::{BoothError, BoothResult},
    },
    layout::template::resolve_layout,
    render::{
        backend::{RenderSettings, Surface},
        passes::{DrawBackend, execute_plan},
        plan::{DrawPlan, ResolvedPlacement, STICKER_SHADOW, ShadowStyle, plan_scene},
        shadow::{ShadowRaster, coverage_shadow, rect_shadow},
    },
    scene::model::{CompositeScene, PhotoFrame},
};

/// Final output of a composite: the raster and its PNG encoding.
#[derive(Clone, Debug)]
pub struct RenderedComposite {
    /// Premultiplied pixels at the layout's canvas size.
    pub surface: Surface,
    /// Lossless encoding handed to download/print/storage.
    pub encoded: EncodedComposite,
}

#[derive(Clone)]
struct ImagePaint {
    paint: vello_cpu::Image,
    w: u32,
    h: u32,
}

#[derive(Clone)]
struct ShadowPaint {
    image: ImagePaint,
    origin: Vec2,
}

#[derive(Clone)]
struct StickerRaster {
    image: ImagePaint,
    shadow: Option<ShadowPaint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct StickerKey {
    kind: StickerKind,
    px: u32,
}

struct StickerCache {
    entries: HashMap<StickerKey, StickerRaster>,
    lru: VecDeque<StickerKey>,
    capacity: usize,
}

impl StickerCache {
    fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    fn get(&mut self, key: StickerKey) -> Option<StickerRaster> {
        let hit = self.entries.get(&key).cloned()?;
        self.touch(key);
        Some(hit)
    }

    fn insert(&mut self, key: StickerKey, raster: StickerRaster) {
        self.entries.insert(key, raster);
        self.touch(key);
        while self.lru.len() > self.capacity {
            if let Some(old) = self.lru.pop_front() {
                self.entries.remove(&old);
            }
        }
    }

    fn touch(&mut self, key: StickerKey) {
        if let Some(pos) = self.lru.iter().position(|k| *k == key) {
            self.lru.remove(pos);
        }
        self.lru.push_back(key);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// CPU compositor powered by `vello_cpu`.
///
/// Each render is independent; the only state kept between calls is the `(decoration, size)`
/// raster cache, which never affects output.
pub struct Compositor {
    settings: RenderSettings,
    stickers: StickerCache,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}

impl Compositor {
    /// Build a compositor with `settings`.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            stickers: StickerCache::new(settings.sticker_cache_capacity),
            settings,
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Number of decoration rasters currently cached.
    pub fn cached_sticker_rasters(&self) -> usize {
        self.stickers.len()
    }

    /// Composite `scene` and encode it as PNG.
    #[tracing::instrument(skip(self, scene), fields(layout = %scene.layout))]
    pub fn render(&mut self, scene: &CompositeScene) -> BoothResult<RenderedComposite> {
        let surface = self.rasterize(scene)?;
        let encoded = encode_png(&surface)?;
        Ok(RenderedComposite { surface, encoded })
    }

    /// Composite `scene` into a premultiplied surface without encoding it.
    pub fn rasterize(&mut self, scene: &CompositeScene) -> BoothResult<Surface> {
        let template = resolve_layout(&scene.layout)?;
        let color = FrameColor::parse(&scene.frame_color)?;

        let photos = &scene.photos[..scene.photos.len().min(template.photo_count)];
        if scene.photos.len() > photos.len() {
            tracing::debug!(
                supplied = scene.photos.len(),
                slots = template.photo_count,
                "ignoring photos beyond the layout's slots"
            );
        }
        let present: Vec<bool> = photos.iter().map(|p| !p.is_missing()).collect();
        let plan = plan_scene(
            template,
            color,
            &present,
            &scene.placements,
            self.settings.shadows,
        )?;

        let photo_paints = self.decode_photos(photos)?;
        let sticker_rasters = self.prepare_stickers(&plan)?;
        tracing::debug!(
            ops = plan.ops.len(),
            photos = photo_paints.iter().flatten().count(),
            stickers = sticker_rasters.len(),
            "draw plan ready"
        );

        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| BoothError::validation("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| BoothError::validation("canvas height exceeds u16"))?;

        let mut frame = CpuFrame {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
            photos: &photo_paints,
            stickers: &sticker_rasters,
        };
        execute_plan(&mut frame, &plan)
    }

    fn decode_photos(&self, photos: &[PhotoFrame]) -> BoothResult<Vec<Option<ImagePaint>>> {
        let decode = |p: &PhotoFrame| -> BoothResult<Option<PreparedImage>> {
            if p.is_missing() {
                return Ok(None);
            }
            decode_image(p.bytes()).map(Some)
        };

        let decoded: Vec<BoothResult<Option<PreparedImage>>> = if self.settings.parallel_decode {
            photos.par_iter().map(decode).collect()
        } else {
            photos.iter().map(decode).collect()
        };

        decoded
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                let prepared = r.map_err(|e| match e {
                    BoothError::Decode(msg) => BoothError::decode(format!("photo {i}: {msg}")),
                    other => other,
                })?;
                prepared.map(|img| image_paint(&img)).transpose()
            })
            .collect()
    }

    fn prepare_stickers(
        &mut self,
        plan: &DrawPlan,
    ) -> BoothResult<HashMap<StickerKey, StickerRaster>> {
        let mut ready = HashMap::new();
        let mut missing = Vec::new();
        for (kind, px) in plan.sticker_rasters() {
            let key = StickerKey { kind, px };
            match self.stickers.get(key) {
                Some(hit) => {
                    ready.insert(key, hit);
                }
                None => missing.push(key),
            }
        }
        tracing::debug!(
            cached = ready.len(),
            missing = missing.len(),
            "sticker rasters"
        );

        let shadows = self.settings.shadows;
        let build = |key: &StickerKey| -> BoothResult<(PreparedImage, Option<ShadowRaster>)> {
            let img = rasterize_sticker(key.kind, key.px)?;
            let shadow = if shadows {
                Some(coverage_shadow(&img, &STICKER_SHADOW)?)
            } else {
                None
            };
            Ok((img, shadow))
        };

        let built: Vec<BoothResult<(PreparedImage, Option<ShadowRaster>)>> =
            if self.settings.parallel_decode {
                missing.par_iter().map(build).collect()
            } else {
                missing.iter().map(build).collect()
            };

        for (key, result) in missing.into_iter().zip(built) {
            let (img, shadow) = result?;
            let raster = StickerRaster {
                image: image_paint(&img)?,
                shadow: shadow.as_ref().map(shadow_paint).transpose()?,
            };
            self.stickers.insert(key, raster.clone());
            ready.insert(key, raster);
        }

        Ok(ready)
    }
}

/// Composite `scene` with default settings (cache capacity from the environment).
pub fn render_composite(scene: &CompositeScene) -> BoothResult<RenderedComposite> {
    Compositor::new(RenderSettings::from_env()).render(scene)
}

struct CpuFrame<'a> {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    photos: &'a [Option<ImagePaint>],
    stickers: &'a HashMap<StickerKey, StickerRaster>,
}

impl CpuFrame<'_> {
    fn draw_image(&mut self, image: &ImagePaint, transform: Affine) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(image.paint.clone());
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.w),
            f64::from(image.h),
        ));
    }

    fn sticker_raster(&self, p: &ResolvedPlacement) -> BoothResult<&StickerRaster> {
        let key = StickerKey {
            kind: p.kind,
            px: p.raster_px,
        };
        self.stickers
            .get(&key)
            .ok_or_else(|| BoothError::unknown_asset(format!("{} not prepared", p.kind)))
    }
}

impl DrawBackend for CpuFrame<'_> {
    fn fill(&mut self, rect: Rect, color: FrameColor) -> BoothResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&rect_to_cpu(rect));
        Ok(())
    }

    fn rect_shadow(&mut self, rect: Rect, style: &ShadowStyle) -> BoothResult<()> {
        let clip = Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        );
        let Some(shadow) = rect_shadow(rect, style, clip) else {
            return Ok(());
        };
        let paint = shadow_paint(&shadow)?;
        self.draw_image(&paint.image, Affine::translate(paint.origin));
        Ok(())
    }

    fn photo(&mut self, photo: usize, dest: Rect) -> BoothResult<()> {
        let Some(Some(img)) = self.photos.get(photo) else {
            return Ok(());
        };
        let img = img.clone();
        let transform = Affine::translate(dest.origin().to_vec2())
            * Affine::scale_non_uniform(
                dest.width() / f64::from(img.w),
                dest.height() / f64::from(img.h),
            );
        self.draw_image(&img, transform);
        Ok(())
    }

    fn sticker_shadow(
        &mut self,
        placement: &ResolvedPlacement,
        style: &ShadowStyle,
    ) -> BoothResult<()> {
        let Some(shadow) = self.sticker_raster(placement)?.shadow.clone() else {
            return Ok(());
        };
        let transform = Affine::translate(style.offset)
            * placement.raster_transform()
            * Affine::translate(shadow.origin);
        self.draw_image(&shadow.image, transform);
        Ok(())
    }

    fn sticker(&mut self, placement: &ResolvedPlacement) -> BoothResult<()> {
        let image = self.sticker_raster(placement)?.image.clone();
        self.draw_image(&image, placement.raster_transform());
        Ok(())
    }

    fn finish(&mut self, plan: &DrawPlan) -> BoothResult<Surface> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(Surface {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn image_paint(img: &PreparedImage) -> BoothResult<ImagePaint> {
    let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
    Ok(ImagePaint {
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
        w: img.width,
        h: img.height,
    })
}

fn shadow_paint(shadow: &ShadowRaster) -> BoothResult<ShadowPaint> {
    let pixmap = pixmap_from_premul_bytes(&shadow.rgba8_premul, shadow.width, shadow.height)?;
    Ok(ShadowPaint {
        image: ImagePaint {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            w: shadow.width,
            h: shadow.height,
        },
        origin: Vec2::new(f64::from(shadow.origin_x), f64::from(shadow.origin_y)),
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> BoothResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| BoothError::decode(format!("image width {width} exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| BoothError::decode(format!("image height {height} exceeds u16")))?;
    if bytes.len() != width as usize * height as usize * 4 {
        return Err(BoothError::decode("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in bytes.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
