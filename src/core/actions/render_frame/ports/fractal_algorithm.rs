use crate::core::data::complex::Complex;

pub trait FractalAlgorithm {
    fn compute(&self, point: Complex) -> u32;
}
