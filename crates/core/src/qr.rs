//! QR symbol rasterization.
//!
//! The `qrcode` crate produces the module matrix; this module scales it
//! into a fixed-size two-color RGBA raster with a 4-module quiet zone and
//! serializes it as PNG. Rendering is fully deterministic for identical
//! (content, size, colors) input.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use qrcode::QrCode;

use crate::color::{ColorPair, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
use crate::error::CoreError;

/// Rendered dimension used when the caller supplies no size or a
/// non-positive one.
pub const DEFAULT_SIZE: i64 = 300;

/// Quiet-zone width in modules on each side of the symbol.
const QUIET_ZONE: u32 = 4;

fn argb_to_rgba(argb: u32) -> Rgba<u8> {
    Rgba([
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ])
}

/// Encode `content` into a PNG raster of (at least) `size` x `size` pixels.
///
/// `size <= 0` falls back to [`DEFAULT_SIZE`]. When `colors` is `None` the
/// encoder defaults apply: opaque black modules on an opaque white
/// background. A requested size smaller than the symbol plus its quiet
/// zone grows to one pixel per module rather than dropping modules.
pub fn render_png(content: &str, size: i64, colors: Option<ColorPair>) -> Result<Vec<u8>, CoreError> {
    let size = if size <= 0 { DEFAULT_SIZE } else { size };

    let code = QrCode::new(content.as_bytes())
        .map_err(|e| CoreError::Encoding(e.to_string()))?;

    let modules = code.width() as u32;
    let quiet_width = modules + 2 * QUIET_ZONE;
    let output = (size as u32).max(quiet_width);
    let scale = output / quiet_width;
    let left = (output - modules * scale) / 2;
    let top = left;

    let (fg, bg) = match colors {
        Some(pair) => (pair.foreground, pair.background),
        None => (DEFAULT_FOREGROUND, DEFAULT_BACKGROUND),
    };
    let dark = argb_to_rgba(fg);
    let light = argb_to_rgba(bg);

    let mut img = RgbaImage::from_pixel(output, output, light);
    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == qrcode::Color::Dark {
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(left + x * scale + dx, top + y * scale + dy, dark);
                    }
                }
            }
        }
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(img.as_raw(), output, output, ExtendedColorType::Rgba8)
        .map_err(|e| CoreError::Image(e.to_string()))?;
    Ok(png)
}
