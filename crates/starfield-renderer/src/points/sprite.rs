//! Particle sprite image: a PNG from disk, a rasterised "$" glyph, or a
//! generated soft disc when no font can draw the glyph.

use std::path::Path;

use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};

use crate::gpu::RendererError;

/// Edge length of generated sprites.
pub const SPRITE_SIZE: u32 = 64;

/// Glyph every particle shows unless a PNG sprite is configured.
pub const DEFAULT_GLYPH: &str = "$";

/// Glyph em size relative to the sprite edge (28px text in a 32px box).
const GLYPH_SCALE: f32 = 0.875;

/// Tightly packed RGBA8 pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl SpriteImage {
    /// White disc whose alpha falls off quadratically toward the rim.
    pub fn soft_disc(size: u32) -> Self {
        let size = size.max(2);
        let center = size as f32 / 2.0;
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                let d = (dx * dx + dy * dy).sqrt() / center;
                let falloff = (1.0 - d).clamp(0.0, 1.0);
                let alpha = (falloff * falloff * 255.0).round() as u8;
                pixels.extend_from_slice(&[255, 255, 255, alpha]);
            }
        }

        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    /// Rasterise `text` in bold white onto a transparent `size` square,
    /// centered on its ink. `None` when no installed font draws any pixel.
    pub fn glyph(text: &str, size: u32) -> Option<Self> {
        let size = size.max(8);
        let font_size = size as f32 * GLYPH_SCALE;
        // Glyph pixels may land above or left of the buffer origin.
        let margin = size as i32;
        let canvas = size * 3;

        let mut font_system = FontSystem::new();
        let mut swash_cache = SwashCache::new();
        let mut buffer = Buffer::new(&mut font_system, Metrics::new(font_size, font_size * 1.2));
        buffer.set_size(&mut font_system, Some(size as f32 * 2.0), Some(size as f32 * 2.0));
        buffer.set_text(
            &mut font_system,
            text,
            Attrs::new().family(Family::SansSerif).weight(Weight::BOLD),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut font_system, false);

        let mut coverage = vec![0u8; (canvas * canvas) as usize];
        buffer.draw(
            &mut font_system,
            &mut swash_cache,
            Color::rgb(255, 255, 255),
            |x, y, w, h, color| {
                for py in y + margin..y + margin + h as i32 {
                    for px in x + margin..x + margin + w as i32 {
                        if (0..canvas as i32).contains(&px) && (0..canvas as i32).contains(&py) {
                            let i = (py as u32 * canvas + px as u32) as usize;
                            coverage[i] = coverage[i].max(color.a());
                        }
                    }
                }
            },
        );

        Self::centered(&coverage, canvas, size)
    }

    /// The "$" glyph sprite, or the soft disc if it cannot be rasterised.
    pub fn default_glyph() -> Self {
        Self::glyph(DEFAULT_GLYPH, SPRITE_SIZE).unwrap_or_else(|| {
            tracing::warn!("no font could draw {DEFAULT_GLYPH:?}, using soft disc sprite");
            Self::soft_disc(SPRITE_SIZE)
        })
    }

    /// Copy the inked region of a square coverage map into the middle of a
    /// `size` square sprite, cropping if it does not fit.
    fn centered(coverage: &[u8], canvas: u32, size: u32) -> Option<Self> {
        let inked = |i: usize| coverage[i] > 0;
        let (mut x0, mut y0, mut x1, mut y1) = (u32::MAX, u32::MAX, 0, 0);
        for y in 0..canvas {
            for x in 0..canvas {
                if inked((y * canvas + x) as usize) {
                    x0 = x0.min(x);
                    y0 = y0.min(y);
                    x1 = x1.max(x);
                    y1 = y1.max(y);
                }
            }
        }
        if x0 > x1 {
            return None;
        }

        // Offset from sprite coordinates back into the coverage map.
        let dx = (x0 + x1 + 1) as i64 / 2 - size as i64 / 2;
        let dy = (y0 + y1 + 1) as i64 / 2 - size as i64 / 2;
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size as i64 {
            for x in 0..size as i64 {
                let (cx, cy) = (x + dx, y + dy);
                let alpha = if (0..canvas as i64).contains(&cx) && (0..canvas as i64).contains(&cy) {
                    coverage[(cy * canvas as i64 + cx) as usize]
                } else {
                    0
                };
                pixels.extend_from_slice(&[255, 255, 255, alpha]);
            }
        }

        Some(Self {
            width: size,
            height: size,
            pixels,
        })
    }

    /// Decode an image file into RGBA8.
    pub fn load(path: &Path) -> Result<Self, RendererError> {
        let rgba = image::open(path)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(RendererError::SpriteError(format!(
                "{} has no pixels",
                path.display()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// The configured PNG sprite, or the "$" glyph when none is set or it
    /// cannot be read.
    pub fn from_config(sprite: Option<&str>) -> Self {
        if let Some(path) = sprite {
            match Self::load(Path::new(path)) {
                Ok(image) => {
                    tracing::info!(
                        "loaded particle sprite {path} ({}x{})",
                        image.width,
                        image.height
                    );
                    return image;
                }
                Err(e) => {
                    tracing::warn!("failed to load particle sprite {path}: {e}, using glyph");
                }
            }
        }
        Self::default_glyph()
    }

    /// Upload as an sRGB texture.
    pub fn create_texture(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        use wgpu::util::DeviceExt;

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("particle sprite"),
                size: wgpu::Extent3d {
                    width: self.width,
                    height: self.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &self.pixels,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    #[cfg(test)]
    fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[((y * self.width + x) * 4 + 3) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_disc_is_opaque_in_center_and_clear_in_corners() {
        let disc = SpriteImage::soft_disc(32);
        assert_eq!(disc.pixels.len(), 32 * 32 * 4);
        assert!(disc.alpha_at(16, 16) > 230);
        assert_eq!(disc.alpha_at(0, 0), 0);
        assert_eq!(disc.alpha_at(31, 31), 0);
        assert_eq!(disc.alpha_at(0, 16), 0);
    }

    #[test]
    fn soft_disc_is_symmetric() {
        let disc = SpriteImage::soft_disc(16);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(disc.alpha_at(x, y), disc.alpha_at(15 - x, y));
                assert_eq!(disc.alpha_at(x, y), disc.alpha_at(x, 15 - y));
            }
        }
    }

    #[test]
    fn soft_disc_rgb_is_white() {
        let disc = SpriteImage::soft_disc(8);
        assert!(disc.pixels.chunks_exact(4).all(|p| p[..3] == [255, 255, 255]));
    }

    #[test]
    fn load_missing_file_is_sprite_error() {
        let err = SpriteImage::load(Path::new("/tmp/no_such_starfield_sprite.png")).unwrap_err();
        assert!(matches!(err, RendererError::SpriteError(_)));
    }

    #[test]
    fn load_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 40]))
            .save(&path)
            .unwrap();

        let sprite = SpriteImage::load(&path).unwrap();
        assert_eq!((sprite.width, sprite.height), (3, 2));
        assert_eq!(&sprite.pixels[..4], &[10, 20, 30, 40]);
    }

    #[test]
    fn from_config_falls_back_to_glyph() {
        let sprite = SpriteImage::from_config(Some("/tmp/no_such_starfield_sprite.png"));
        assert_eq!(sprite, SpriteImage::default_glyph());
        assert_eq!(SpriteImage::from_config(None).width, SPRITE_SIZE);
    }

    #[test]
    fn default_sprite_is_the_dollar_glyph() {
        let sprite = SpriteImage::from_config(None);
        assert_eq!((sprite.width, sprite.height), (SPRITE_SIZE, SPRITE_SIZE));
        assert_ne!(sprite, SpriteImage::soft_disc(SPRITE_SIZE));

        // A disc is unchanged by a diagonal flip, a "$" is not.
        let n = SPRITE_SIZE;
        let mismatched = (0..n)
            .flat_map(|y| (0..n).map(move |x| (x, y)))
            .filter(|&(x, y)| sprite.alpha_at(x, y).abs_diff(sprite.alpha_at(y, x)) > 64)
            .count();
        assert!(mismatched > 0, "sprite looks radially symmetric");
        assert!(sprite.pixels.chunks_exact(4).all(|p| p[..3] == [255, 255, 255]));
    }

    #[test]
    fn blank_glyph_has_no_ink() {
        assert!(SpriteImage::glyph(" ", 32).is_none());
    }

    #[test]
    fn centered_moves_ink_to_the_middle() {
        let canvas = 12;
        let mut coverage = vec![0u8; 144];
        // 2x2 block in the top-left corner.
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            coverage[y * canvas + x] = 200;
        }

        let sprite = SpriteImage::centered(&coverage, canvas as u32, 4).unwrap();
        assert_eq!(sprite.pixels.len(), 4 * 4 * 4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(sprite.alpha_at(x, y), 200);
        }
        assert_eq!(sprite.alpha_at(0, 0), 0);
        assert_eq!(sprite.alpha_at(3, 3), 0);
    }

    #[test]
    fn centered_without_ink_is_none() {
        assert!(SpriteImage::centered(&[0; 64], 8, 4).is_none());
    }
}
