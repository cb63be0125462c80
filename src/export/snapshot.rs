//! Immutable pixel snapshots of the composed canvas.

use super::types::ExportError;
use crate::draw::{Background, StrokeCanvas, render_composed};
use cairo::{Context, Format, ImageSurface};

/// Owned copy of a rendered ARGB32 pixel buffer.
///
/// Taken on the thread that owns the canvas, then handed to the export worker.
/// The snapshot shares nothing with the canvas, so drawing can continue while
/// it is encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct CanvasSnapshot {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl std::fmt::Debug for CanvasSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasSnapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl CanvasSnapshot {
    /// Renders background and strokes offscreen and copies the pixels out.
    pub fn capture(
        canvas: &StrokeCanvas,
        background: &Background,
        width: u32,
        height: u32,
    ) -> Result<Self, ExportError> {
        let (w, h) = surface_size(width, height)?;
        let mut surface = ImageSurface::create(Format::ARgb32, w, h)?;
        {
            let ctx = Context::new(&surface)?;
            render_composed(&ctx, canvas, background, width as f64, height as f64);
        }
        surface.flush();

        let stride = surface.stride() as usize;
        let data = surface
            .data()
            .map_err(|e| ExportError::Snapshot(e.to_string()))?
            .to_vec();

        log::debug!(
            "Captured {}x{} snapshot ({} strokes, {} bytes)",
            width,
            height,
            canvas.strokes().len(),
            data.len()
        );

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied ARGB32 rows, `stride` bytes apart.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at (x, y) as `0xAARRGGBB` (premultiplied), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let bytes: [u8; 4] = self.data.get(offset..offset + 4)?.try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }
}

/// Encodes a snapshot as PNG.
pub fn encode_png(snapshot: &CanvasSnapshot) -> Result<Vec<u8>, ExportError> {
    let (w, h) = surface_size(snapshot.width, snapshot.height)?;
    let surface = ImageSurface::create_for_data(
        snapshot.data.clone(),
        Format::ARgb32,
        w,
        h,
        snapshot.stride as i32,
    )?;

    let mut buffer = Vec::new();
    surface
        .write_to_png(&mut buffer)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    log::debug!("Encoded {}x{} PNG ({} bytes)", w, h, buffer.len());
    Ok(buffer)
}

fn surface_size(width: u32, height: u32) -> Result<(i32, i32), ExportError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(ExportError::InvalidSize { width, height }),
    }
}
