use std::num::NonZeroUsize;
use std::thread;

use thiserror::Error;
use tracing::debug;

use crate::core::actions::compute_row_band::compute_row_band::compute_row_band;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotGreyscale;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::calculate_row_bands::calculate_row_bands;
use crate::core::util::panic_message::panic_message;

#[derive(Debug, Error)]
pub enum RenderFrameError {
    #[error(
        "frame buffer is {buffer_width}x{buffer_height} \
         but viewport is {viewport_width}x{viewport_height}"
    )]
    DimensionMismatch {
        buffer_width: u32,
        buffer_height: u32,
        viewport_width: u32,
        viewport_height: u32,
    },
    #[error("frame buffer error: {0}")]
    FrameBuffer(#[from] FrameBufferError),
    #[error("mandelbrot error: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error("could not spawn worker for row band {band}: {source}")]
    Spawn {
        band: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("worker for row band {band} panicked: {message}")]
    WorkerPanicked { band: usize, message: String },
}

/// Renders every pixel of `buffer` by splitting its rows into `thread_count`
/// static bands, one scoped thread per band, and joining them all before
/// returning.
pub fn render_frame<Alg, CMap>(
    buffer: &mut FrameBuffer,
    viewport: &Viewport,
    thread_count: NonZeroUsize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<(), RenderFrameError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
{
    if buffer.width() != viewport.width() || buffer.height() != viewport.height() {
        return Err(RenderFrameError::DimensionMismatch {
            buffer_width: buffer.width(),
            buffer_height: buffer.height(),
            viewport_width: viewport.width(),
            viewport_height: viewport.height(),
        });
    }

    let bands = calculate_row_bands(viewport.height(), thread_count);
    let band_slices = buffer.split_into_bands(&bands)?;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(bands.len());
        let mut failure = None;

        for (band, band_pixels) in bands.iter().copied().zip(band_slices) {
            debug!(
                band = band.index(),
                start_row = band.start_row(),
                end_row = band.end_row(),
                "dispatching row band"
            );

            let spawned = thread::Builder::new()
                .name(format!("row-band-{}", band.index()))
                .spawn_scoped(scope, move || {
                    compute_row_band(band_pixels, band, viewport, algorithm, colour_map);
                });

            match spawned {
                Ok(handle) => handles.push((band, handle)),
                Err(source) => {
                    failure = Some(RenderFrameError::Spawn {
                        band: band.index(),
                        source,
                    });
                    break;
                }
            }
        }

        // join every worker, even after a failure, so none is left for the scope to re-panic
        for (band, handle) in handles {
            if let Err(payload) = handle.join() {
                failure.get_or_insert(RenderFrameError::WorkerPanicked {
                    band: band.index(),
                    message: panic_message(payload.as_ref()),
                });
            }
        }

        failure.map_or(Ok(()), Err)
    })
}

/// Allocates a frame for `viewport` and renders the Mandelbrot set into it.
pub fn render_mandelbrot_frame(
    viewport: &Viewport,
    thread_count: NonZeroUsize,
) -> Result<FrameBuffer, RenderFrameError> {
    let algorithm = MandelbrotAlgorithm::new(viewport.max_iterations())?;
    let colour_map = MandelbrotGreyscale::new(viewport.max_iterations())?;
    let mut buffer = FrameBuffer::new(viewport.width(), viewport.height());

    render_frame(&mut buffer, viewport, thread_count, &algorithm, &colour_map)?;

    Ok(buffer)
}
