//! Window-less framebuffer standing in for the host's display

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use painting::{DisplaySurface, ViewportSize};
use tiny_skia::{PixmapMut, PixmapRef};
use tracing::info;

use crate::error::AppError;

/// Packed RGBA8 framebuffer, one `u32` per pixel
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    presented: u64,
}

impl Framebuffer {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![0; size.pixel_count()],
            presented: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }

    /// Number of frames presented so far
    #[inline]
    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Snapshot the contents as a straight-alpha image
    pub fn capture(&self) -> Option<RgbaImage> {
        let pixmap = PixmapRef::from_bytes(self.bytes(), self.width, self.height)?;
        let rgba = pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.width, self.height, rgba)
    }

    /// Encode the current contents as PNG
    pub fn save_png(&self, path: &Path) -> Result<(), AppError> {
        let image = self.capture().ok_or_else(|| {
            AppError::Encode(format!("empty framebuffer {}x{}", self.width, self.height))
        })?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| AppError::Encode(e.to_string()))?;

        info!("Saved frame to {}", path.display());
        Ok(())
    }
}

impl DisplaySurface for Framebuffer {
    fn target(&mut self) -> Option<PixmapMut<'_>> {
        PixmapMut::from_bytes(bytemuck::cast_slice_mut(&mut self.pixels), self.width, self.height)
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}
