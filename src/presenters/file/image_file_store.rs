use std::path::{Path, PathBuf};

use crate::core::actions::run_batch::ports::frame_store::{FrameStore, StoreError};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_format::FrameFormat;
use crate::storage::write_frame::write_frame;

/// Writes each finished frame as an image file inside `output_dir`.
pub struct ImageFileStore {
    output_dir: PathBuf,
    format: FrameFormat,
}

impl ImageFileStore {
    /// Creates `output_dir` if it does not exist yet.
    pub fn new(output_dir: impl AsRef<Path>, format: FrameFormat) -> Result<Self, StoreError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self { output_dir, format })
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl FrameStore for ImageFileStore {
    fn extension(&self) -> &str {
        self.format.extension()
    }

    fn store(&self, frame: &FrameBuffer, file_name: &str) -> Result<(), StoreError> {
        write_frame(frame, self.output_dir.join(file_name), self.format)
    }
}
