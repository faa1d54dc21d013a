//! Environment variable overrides

use crate::{ConfigError, SessionConfig};

/// Viewport override, formatted as `<width>x<height>`
pub const ENV_VIEWPORT: &str = "PATHVIEW_VIEWPORT";

/// Path seed override
pub const ENV_SEED: &str = "PATHVIEW_SEED";

/// Target frame rate override
pub const ENV_FPS: &str = "PATHVIEW_FPS";

/// Parse a `<width>x<height>` viewport string
pub fn parse_viewport(value: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidViewport(value.to_string());
    let (w, h) = value.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width = w.trim().parse().map_err(|_| invalid())?;
    let height = h.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

impl SessionConfig {
    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_VIEWPORT) {
            let (width, height) = parse_viewport(&value)?;
            self.viewport.width = width;
            self.viewport.height = height;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.path.seed = Some(parse_number(ENV_SEED, &value)?);
        }
        if let Some(value) = lookup(ENV_FPS) {
            self.frame.target_fps = parse_number(ENV_FPS, &value)?;
        }
        Ok(())
    }
}
