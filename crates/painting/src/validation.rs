use thiserror::Error;

use crate::types::ViewportSize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Viewport has no area: {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("Viewport {width}x{height} exceeds the maximum texture size of {max}")]
    ExceedsTextureLimit { width: u32, height: u32, max: u32 },
    #[error("Failed to allocate {width}x{height} offscreen buffer")]
    AllocationFailed { width: u32, height: u32 },
    #[error("Offscreen buffer not allocated - call ensure_buffer() first")]
    BufferNotAllocated,
    #[error("Viewport not measured - call set_viewport() first")]
    NotMeasured,
}

/// Check if a buffer of the given size can be uploaded as a single texture
pub fn fits_texture(width: u32, height: u32, max_texture_size: u32) -> bool {
    width <= max_texture_size && height <= max_texture_size
}

/// Validate a viewport before allocating an offscreen buffer for it
pub fn validate_viewport(viewport: ViewportSize, max_texture_size: u32) -> Result<(), RenderError> {
    let ViewportSize { width, height } = viewport;

    if viewport.is_empty() {
        return Err(RenderError::EmptyViewport { width, height });
    }

    if !fits_texture(width, height, max_texture_size) {
        return Err(RenderError::ExceedsTextureLimit {
            width,
            height,
            max: max_texture_size,
        });
    }

    Ok(())
}
