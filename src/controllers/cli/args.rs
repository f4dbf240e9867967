use std::path::PathBuf;

use clap::Parser;

use crate::core::data::batch_config::{
    BatchConfig, DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_CONCURRENT_FRAMES,
    DEFAULT_FRAME_COUNT, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, DEFAULT_MAX_ITERATIONS,
    DEFAULT_THREAD_COUNT, DEFAULT_X_SCALE,
};
use crate::core::data::frame_format::FrameFormat;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "mandel",
    version,
    about = "Renders a sequence of Mandelbrot frames using concurrent frame workers \
             and row-band threads",
    after_help = "Some examples are:\n  \
                  mandel -x -0.5 -y -0.5 -s 0.2 -o still.jpg\n  \
                  mandel -x -0.38 -y -0.665 -s 0.05 -m 100 -o still.ppm\n  \
                  mandel -n 4 -t 8 -W 640 -H 480"
)]
pub struct CliArgs {
    /// X coordinate of the image center point, used for still renders
    #[arg(short = 'x', long, default_value_t = DEFAULT_CENTER_X, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Y coordinate of the image center point
    #[arg(short = 'y', long, default_value_t = DEFAULT_CENTER_Y, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Scale of the image in Mandelbrot coordinates (X-axis), used for still renders
    #[arg(short = 's', long = "scale", default_value_t = DEFAULT_X_SCALE)]
    pub x_scale: f64,

    /// Width of the image in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_IMAGE_WIDTH)]
    pub width: u32,

    /// Height of the image in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_IMAGE_HEIGHT)]
    pub height: u32,

    /// The maximum number of iterations per point
    #[arg(short = 'm', long = "max", default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Number of frames rendered at the same time
    #[arg(short = 'n', long = "concurrent-frames", default_value_t = DEFAULT_CONCURRENT_FRAMES)]
    pub num_concurrent_frames: usize,

    /// Number of row-band threads per frame
    #[arg(short = 't', long = "threads", default_value_t = DEFAULT_THREAD_COUNT)]
    pub thread_count: usize,

    /// Number of frames in the batch
    #[arg(short = 'f', long = "frames", default_value_t = DEFAULT_FRAME_COUNT)]
    pub frame_count: usize,

    /// Directory the batch frames are written to
    #[arg(short = 'd', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Image format of the written frames [default: jpeg, or the --output extension]
    #[arg(long, value_enum)]
    pub format: Option<FrameFormat>,

    /// Render a single still image to this file instead of the batch
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    #[must_use]
    pub fn to_config(&self) -> BatchConfig {
        BatchConfig {
            center_x: self.center_x,
            center_y: self.center_y,
            x_scale: self.x_scale,
            image_width: self.width,
            image_height: self.height,
            max_iterations: self.max_iterations,
            num_concurrent_frames: self.num_concurrent_frames,
            thread_count: self.thread_count,
            frame_count: self.frame_count,
            output_dir: self.output_dir.clone(),
            format: self.format.unwrap_or_default(),
        }
    }
}
