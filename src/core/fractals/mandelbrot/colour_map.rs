use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::frame_buffer::MAX_COLOUR;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// `floor(MAX_COLOUR * iterations / max_iterations)`, computed in integers.
/// Iteration counts above the cap are clamped to it.
#[must_use]
pub fn iteration_to_colour(iterations: u32, max_iterations: u32) -> u32 {
    debug_assert!(max_iterations > 0);

    let iterations = u64::from(iterations.min(max_iterations));
    let scaled = u64::from(MAX_COLOUR) * iterations / u64::from(max_iterations.max(1));

    scaled as u32
}

/// Scales iteration counts linearly onto the packed colour range.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotGreyscale {
    max_iterations: u32,
}

impl MandelbrotGreyscale {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }
}

impl ColourMap for MandelbrotGreyscale {
    fn map(&self, value: u32) -> u32 {
        iteration_to_colour(value, self.max_iterations)
    }
}
