use std::path::PathBuf;

/// Errors that abort icon generation. Font problems are not among them: a font
/// that cannot be used just moves the chain on to the next tier.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("invalid color {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
    #[error("icon size must be greater than zero")]
    ZeroSize,
    #[error("font size must be greater than zero")]
    ZeroFontSize,
    #[error("icon text is empty")]
    EmptyText,
    #[error("create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write {path}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
