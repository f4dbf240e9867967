mod controllers;
mod core;
mod logging;
mod presenters;
mod storage;

pub use crate::controllers::cli::args::CliArgs;
pub use crate::controllers::cli::cli_controller::CliController;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_frame, render_mandelbrot_frame,
};
pub use crate::core::actions::run_batch::ports::frame_store::{FrameStore, StoreError};
pub use crate::core::actions::run_batch::run_batch::{BatchError, BatchReport, JobError, run_batch};
pub use crate::core::data::batch_config::{BatchConfig, ConfigError};
pub use crate::core::data::batch_job::{BatchJob, JobOutcome, JobState};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, MAX_COLOUR};
pub use crate::core::data::frame_format::{FrameFormat, FrameFormatError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, iterations_at_point};
pub use crate::core::fractals::mandelbrot::colour_map::{MandelbrotGreyscale, iteration_to_colour};
pub use crate::logging::init_logging;
pub use crate::presenters::file::image_file_store::ImageFileStore;
