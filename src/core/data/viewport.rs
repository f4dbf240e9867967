use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport pixel size must be positive: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("viewport scale must be positive and finite: {scale_x}x{scale_y}")]
    InvalidScale { scale_x: f64, scale_y: f64 },
    #[error("viewport center must be finite: ({real}, {imag})")]
    NonFiniteCenter { real: f64, imag: f64 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// The region of the complex plane one frame covers, plus its pixel grid and
/// iteration cap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    scale_x: f64,
    scale_y: f64,
    width: u32,
    height: u32,
    max_iterations: u32,
}

fn is_positive_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

impl Viewport {
    pub fn new(
        center: Complex,
        scale_x: f64,
        scale_y: f64,
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::EmptyImage { width, height });
        }

        if !is_positive_scale(scale_x) || !is_positive_scale(scale_y) {
            return Err(ViewportError::InvalidScale { scale_x, scale_y });
        }

        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter {
                real: center.real,
                imag: center.imag,
            });
        }

        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        Ok(Self {
            center,
            scale_x,
            scale_y,
            width,
            height,
            max_iterations,
        })
    }

    /// Builds a viewport whose vertical scale follows the pixel aspect ratio.
    pub fn with_aspect_ratio(
        center: Complex,
        scale_x: f64,
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> Result<Self, ViewportError> {
        let scale_y = if width == 0 {
            scale_x
        } else {
            scale_x / f64::from(width) * f64::from(height)
        };

        Self::new(center, scale_x, scale_y, width, height, max_iterations)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.center.real - self.scale_x / 2.0
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.center.real + self.scale_x / 2.0
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.center.imag - self.scale_y / 2.0
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.center.imag + self.scale_y / 2.0
    }

    /// Maps pixel column `x` and row `y` onto the complex plane. Pixel (0, 0)
    /// lands on the minimum corner; the maximum corner itself is never sampled.
    #[must_use]
    pub fn pixel_to_complex(&self, x: u32, y: u32) -> Complex {
        let (x_min, x_max) = (self.x_min(), self.x_max());
        let (y_min, y_max) = (self.y_min(), self.y_max());

        Complex {
            real: x_min + f64::from(x) * (x_max - x_min) / f64::from(self.width),
            imag: y_min + f64::from(y) * (y_max - y_min) / f64::from(self.height),
        }
    }
}
