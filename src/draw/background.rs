//! Canvas backgrounds painted underneath the strokes.

use super::canvas::StrokeCanvas;
use super::color::{Color, WHITE};
use anyhow::{Context as _, Result};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// What sits underneath the strokes when the canvas is composed for export.
#[derive(Clone)]
pub enum Background {
    /// Solid fill (white unless configured otherwise)
    Solid(Color),
    /// A picture chosen by the user, scaled to cover the canvas
    Image(cairo::ImageSurface),
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(WHITE)
    }
}

impl fmt::Debug for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Solid(color) => f.debug_tuple("Solid").field(color).finish(),
            Background::Image(image) => f
                .debug_struct("Image")
                .field("width", &image.width())
                .field("height", &image.height())
                .finish(),
        }
    }
}

impl Background {
    /// Loads a PNG file as the background image.
    pub fn load_png(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open background image {}", path.display()))?;
        let image = cairo::ImageSurface::create_from_png(&mut file)
            .with_context(|| format!("Failed to decode background image {}", path.display()))?;
        log::info!(
            "Loaded background image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Background::Image(image))
    }
}

/// Paints the background over the whole `width` x `height` area.
///
/// Should be called on a fresh surface before rendering any stroke.
pub fn render_background(ctx: &cairo::Context, background: &Background, width: f64, height: f64) {
    ctx.save().ok();
    ctx.rectangle(0.0, 0.0, width, height);
    ctx.clip();

    match background {
        Background::Solid(color) => {
            color.apply(ctx);
            let _ = ctx.paint();
        }
        Background::Image(image) => {
            let image_w = image.width() as f64;
            let image_h = image.height() as f64;
            if image_w > 0.0 && image_h > 0.0 {
                // Cover: fill the canvas, cropping whichever axis overflows
                let scale = (width / image_w).max(height / image_h);
                ctx.translate(
                    (width - image_w * scale) / 2.0,
                    (height - image_h * scale) / 2.0,
                );
                ctx.scale(scale, scale);
                if ctx.set_source_surface(image, 0.0, 0.0).is_ok() {
                    // Pad so filtering at the image edge never blends in transparency
                    ctx.source().set_extend(cairo::Extend::Pad);
                    let _ = ctx.paint();
                }
            }
        }
    }

    ctx.restore().ok();
}

/// Paints the background, then every stroke of `canvas` on top.
pub fn render_composed(
    ctx: &cairo::Context,
    canvas: &StrokeCanvas,
    background: &Background,
    width: f64,
    height: f64,
) {
    render_background(ctx, background, width, height);
    let mut surface = ctx.clone();
    canvas.render(&mut surface);
}
