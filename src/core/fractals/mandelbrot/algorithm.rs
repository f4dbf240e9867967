use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Escape radius squared; a point whose orbit leaves `|z| <= 2` diverges.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z -> z*z + c`, starting at `z = c`, until the orbit
/// escapes or `max_iterations` is reached.
#[must_use]
pub fn iterations_at_point(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut iteration = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        iterations_at_point(point, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }
}
