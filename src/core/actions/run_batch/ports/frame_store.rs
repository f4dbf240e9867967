use thiserror::Error;

use crate::core::data::frame_buffer::FrameBuffer;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("frame of {width}x{height} does not fit an image buffer")]
    InvalidFrame { width: u32, height: u32 },
}

/// Where finished frames go. Called concurrently from frame workers.
pub trait FrameStore: Sync {
    fn extension(&self) -> &str;

    fn store(&self, frame: &FrameBuffer, file_name: &str) -> Result<(), StoreError>;
}
