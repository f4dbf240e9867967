use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::row_band::RowBand;
use crate::core::data::viewport::Viewport;

/// Fills `band_pixels`, the row-major samples for `band`'s rows, with the
/// colour of every pixel in those rows.
pub fn compute_row_band<Alg, CMap>(
    band_pixels: &mut [u32],
    band: RowBand,
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    let row_len = viewport.width() as usize;
    debug_assert_eq!(band_pixels.len(), band.row_count() as usize * row_len);

    for (y, row) in band.rows().zip(band_pixels.chunks_exact_mut(row_len)) {
        for (x, sample) in (0..viewport.width()).zip(row.iter_mut()) {
            let iterations = algorithm.compute(viewport.pixel_to_complex(x, y));
            *sample = colour_map.map(iterations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        // encodes the sampled point so tests can see which pixel was computed
        fn compute(&self, point: Complex) -> u32 {
            ((point.imag + 2.0) * 10.0 + (point.real + 2.0)) as u32
        }
    }

    struct IdentityColourMap {}

    impl ColourMap for IdentityColourMap {
        fn map(&self, value: u32) -> u32 {
            value
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(Complex::new(0.0, 0.0), 4.0, 4.0, 4, 4, 10).unwrap()
    }

    #[test]
    fn test_band_rows_are_offset_by_start_row() {
        let mut pixels = vec![0; 8];

        compute_row_band(
            &mut pixels,
            RowBand::new(1, 2, 4),
            &viewport(),
            &StubAlgorithm {},
            &IdentityColourMap {},
        );

        assert_eq!(pixels, vec![20, 21, 22, 23, 30, 31, 32, 33]);
    }

    #[test]
    fn test_empty_band_touches_nothing() {
        let mut pixels: Vec<u32> = vec![];

        compute_row_band(
            &mut pixels,
            RowBand::new(0, 3, 3),
            &viewport(),
            &StubAlgorithm {},
            &IdentityColourMap {},
        );

        assert!(pixels.is_empty());
    }

    #[test]
    fn test_mandelbrot_band_matches_pointwise_evaluation() {
        use crate::core::fractals::mandelbrot::algorithm::{
            MandelbrotAlgorithm, iterations_at_point,
        };
        use crate::core::fractals::mandelbrot::colour_map::{
            MandelbrotGreyscale, iteration_to_colour,
        };

        let viewport = viewport();
        let mut pixels = vec![0; 4];

        compute_row_band(
            &mut pixels,
            RowBand::new(0, 2, 3),
            &viewport,
            &MandelbrotAlgorithm::new(10).unwrap(),
            &MandelbrotGreyscale::new(10).unwrap(),
        );

        let expected: Vec<u32> = (0..4)
            .map(|x| {
                let iterations = iterations_at_point(viewport.pixel_to_complex(x, 2), 10);
                iteration_to_colour(iterations, 10)
            })
            .collect();

        assert_eq!(pixels, expected);
    }
}
