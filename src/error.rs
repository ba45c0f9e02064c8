use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("tile size must be at least 1 pixel")]
    InvalidTileSize,

    #[error("unknown palette '{0}'")]
    UnknownPalette(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
