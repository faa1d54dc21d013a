//! Host configuration: session settings plus where to put the result

use std::path::PathBuf;

use pathview_config::{ConfigError, SessionConfig};

use crate::input::DragGesture;

/// Path of a JSON session config document
pub const ENV_CONFIG: &str = "PATHVIEW_CONFIG";

/// Destination of the final frame
pub const ENV_OUTPUT: &str = "PATHVIEW_OUTPUT";

pub const DEFAULT_OUTPUT: &str = "pathview-frame.png";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub output: PathBuf,
    /// Scripted drag replayed against the session
    pub gesture: DragGesture,
}

impl AppConfig {
    /// Parse configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut session = match lookup(ENV_CONFIG) {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };
        session.apply_overrides(&lookup)?;

        let output = lookup(ENV_OUTPUT)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self {
            session,
            output,
            gesture: DragGesture::default(),
        })
    }
}
