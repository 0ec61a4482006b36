use std::path::PathBuf;
use thiserror::Error;

/// Fatal level construction failure. No partial level is produced.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to load level image '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to decode level image: {0}")]
    Decode(#[from] image::ImageError),
}
