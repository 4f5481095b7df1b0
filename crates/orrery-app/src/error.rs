use orrery_celestial::RegistryError;
use orrery_config::ConfigError;

use crate::render::RenderError;

/// Errors surfaced by the frame scheduler and the host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The renderer factory failed. No scheduler was created.
    #[error("rendering backend unavailable: {0}")]
    RendererUnavailable(String),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("body table error: {0}")]
    Registry(#[from] RegistryError),
    /// A console line that does not parse as a command.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}
