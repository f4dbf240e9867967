use std::fmt;
use std::time::Duration;

use crate::core::data::viewport::Viewport;

pub const FRAME_FILE_PREFIX: &str = "mandel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Queued,
    Rendering,
    Completed,
    Failed,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Queued => "queued",
            Self::Rendering => "rendering",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };

        write!(f, "{name}")
    }
}

/// One frame of a batch; its viewport is fixed before any rendering starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchJob {
    frame_index: usize,
    viewport: Viewport,
}

impl BatchJob {
    #[must_use]
    pub fn new(frame_index: usize, viewport: Viewport) -> Self {
        Self {
            frame_index,
            viewport,
        }
    }

    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// `mandel<NN>.<extension>` with the frame index zero-padded to two digits.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{FRAME_FILE_PREFIX}{:02}.{extension}", self.frame_index)
    }
}

#[derive(Debug)]
pub struct JobOutcome<E> {
    pub frame_index: usize,
    pub file_name: String,
    pub elapsed: Duration,
    pub result: Result<(), E>,
}

impl<E> JobOutcome<E> {
    #[must_use]
    pub fn state(&self) -> JobState {
        if self.result.is_ok() {
            JobState::Completed
        } else {
            JobState::Failed
        }
    }
}
