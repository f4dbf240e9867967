use std::path::Path;

use image::RgbImage;

use crate::core::actions::run_batch::ports::frame_store::StoreError;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_format::FrameFormat;

pub fn write_frame(
    frame: &FrameBuffer,
    filepath: impl AsRef<Path>,
    format: FrameFormat,
) -> Result<(), StoreError> {
    let width = frame.width();
    let height = frame.height();

    let image = RgbImage::from_raw(width, height, frame.to_rgb_bytes())
        .ok_or(StoreError::InvalidFrame { width, height })?;

    // PPM output is binary P6, jpeg uses the encoder's default quality
    image.save_with_format(filepath, format.image_format())?;

    Ok(())
}
