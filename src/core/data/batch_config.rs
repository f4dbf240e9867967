use std::num::NonZeroUsize;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::data::batch_job::BatchJob;
use crate::core::data::complex::Complex;
use crate::core::data::frame_format::FrameFormat;
use crate::core::data::viewport::{Viewport, ViewportError};

pub const DEFAULT_CENTER_X: f64 = 0.0;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_X_SCALE: f64 = 4.0;
pub const DEFAULT_IMAGE_WIDTH: u32 = 1000;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 1000;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_CONCURRENT_FRAMES: usize = 1;
pub const DEFAULT_THREAD_COUNT: usize = 1;
pub const DEFAULT_FRAME_COUNT: usize = 50;

/// Horizontal centre drift per frame.
const CENTER_X_STEP: f64 = 0.01;
/// Horizontal scale of frame 0 and its growth per frame.
const X_SCALE_START: f64 = 0.1;
const X_SCALE_STEP: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("image size must be positive: {width}x{height}")]
    ZeroImageSize { width: u32, height: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("thread count must be greater than zero")]
    ZeroThreadCount,
    #[error("number of concurrent frames must be greater than zero")]
    ZeroConcurrentFrames,
    #[error("frame count must be greater than zero")]
    ZeroFrameCount,
    #[error("x scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("center must be finite, got ({x}, {y})")]
    NonFiniteCenter { x: f64, y: f64 },
    #[error("viewport error: {0}")]
    Viewport(#[from] ViewportError),
}

/// Everything a render run needs, passed explicitly from the CLI into the
/// scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub x_scale: f64,
    pub image_width: u32,
    pub image_height: u32,
    pub max_iterations: u32,
    pub num_concurrent_frames: usize,
    pub thread_count: usize,
    pub frame_count: usize,
    pub output_dir: PathBuf,
    pub format: FrameFormat,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            x_scale: DEFAULT_X_SCALE,
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            num_concurrent_frames: DEFAULT_CONCURRENT_FRAMES,
            thread_count: DEFAULT_THREAD_COUNT,
            frame_count: DEFAULT_FRAME_COUNT,
            output_dir: PathBuf::from("."),
            format: FrameFormat::default(),
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::ZeroImageSize {
                width: self.image_width,
                height: self.image_height,
            });
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if self.thread_count == 0 {
            return Err(ConfigError::ZeroThreadCount);
        }

        if self.num_concurrent_frames == 0 {
            return Err(ConfigError::ZeroConcurrentFrames);
        }

        if self.frame_count == 0 {
            return Err(ConfigError::ZeroFrameCount);
        }

        if !self.x_scale.is_finite() || self.x_scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.x_scale));
        }

        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ConfigError::NonFiniteCenter {
                x: self.center_x,
                y: self.center_y,
            });
        }

        Ok(())
    }

    pub fn thread_count(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.thread_count).ok_or(ConfigError::ZeroThreadCount)
    }

    pub fn concurrent_frames(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.num_concurrent_frames).ok_or(ConfigError::ZeroConcurrentFrames)
    }

    /// The configured centre and scale as a single still frame.
    pub fn still_viewport(&self) -> Result<Viewport, ConfigError> {
        self.validate()?;

        Ok(Viewport::with_aspect_ratio(
            Complex::new(self.center_x, self.center_y),
            self.x_scale,
            self.image_width,
            self.image_height,
            self.max_iterations,
        )?)
    }

    /// Frame `frame_index` of the zoom sequence: the centre drifts right from
    /// the origin and the view widens a little each frame. `center_x` and
    /// `x_scale` only apply to still renders.
    pub fn viewport_for_frame(&self, frame_index: usize) -> Result<Viewport, ConfigError> {
        let k = frame_index as f64;
        let center = Complex::new(CENTER_X_STEP * k, self.center_y);
        let x_scale = X_SCALE_STEP * k + X_SCALE_START;

        Ok(Viewport::with_aspect_ratio(
            center,
            x_scale,
            self.image_width,
            self.image_height,
            self.max_iterations,
        )?)
    }

    /// The whole batch, validated and fully derived up front.
    pub fn jobs(&self) -> Result<Vec<BatchJob>, ConfigError> {
        self.validate()?;

        (0..self.frame_count)
            .map(|frame_index| {
                let viewport = self.viewport_for_frame(frame_index)?;
                Ok(BatchJob::new(frame_index, viewport))
            })
            .collect()
    }
}
