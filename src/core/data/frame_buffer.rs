use crate::core::data::row_band::RowBand;
use thiserror::Error;

/// Largest colour sample a frame can hold, packed as `0xRRGGBB`.
pub const MAX_COLOUR: u32 = 0xFF_FFFF;

fn frame_size(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} frame")]
    PixelOutsideBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error(
        "bands do not cover rows 0..{height} contiguously \
         (band {band} starts at row {start_row})"
    )]
    BandsNotContiguous { band: usize, start_row: u32, height: u32 },
}

pub type FrameBufferData = Vec<u32>;

/// Row-major grid of colour samples, one per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    samples: FrameBufferData,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: vec![0; frame_size(width, height)],
        }
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
    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<u32, FrameBufferError> {
        if x >= self.width || y >= self.height {
            return Err(FrameBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.samples[y as usize * self.width as usize + x as usize])
    }

    /// Hands out one mutable slice per band. The bands must start at row 0,
    /// follow each other without gaps and end at the frame height, so the
    /// slices never alias.
    pub fn split_into_bands(
        &mut self,
        bands: &[RowBand],
    ) -> Result<Vec<&mut [u32]>, FrameBufferError> {
        let row_len = self.width as usize;
        let mut remaining: &mut [u32] = &mut self.samples;
        let mut next_row = 0;
        let mut slices = Vec::with_capacity(bands.len());

        for band in bands {
            if band.start_row() != next_row || band.end_row() < band.start_row() {
                return Err(FrameBufferError::BandsNotContiguous {
                    band: band.index(),
                    start_row: band.start_row(),
                    height: self.height,
                });
            }

            let band_len = band.row_count() as usize * row_len;
            if band_len > remaining.len() {
                return Err(FrameBufferError::BandsNotContiguous {
                    band: band.index(),
                    start_row: band.start_row(),
                    height: self.height,
                });
            }

            let (head, tail) = std::mem::take(&mut remaining).split_at_mut(band_len);
            slices.push(head);
            remaining = tail;
            next_row = band.end_row();
        }

        if next_row != self.height {
            return Err(FrameBufferError::BandsNotContiguous {
                band: bands.len(),
                start_row: next_row,
                height: self.height,
            });
        }

        Ok(slices)
    }

    /// Unpacks each `0xRRGGBB` sample into three bytes.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.samples
            .iter()
            .flat_map(|&colour| {
                [
                    ((colour >> 16) & 0xFF) as u8,
                    ((colour >> 8) & 0xFF) as u8,
                    (colour & 0xFF) as u8,
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = FrameBuffer::new(10, 8);

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 8);
        assert_eq!(buffer.samples().len(), 80);
        assert!(buffer.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let buffer = FrameBuffer::new(3, 3);

        assert_eq!(buffer.pixel(2, 2), Ok(0));
        assert_eq!(
            buffer.pixel(3, 1),
            Err(FrameBufferError::PixelOutsideBounds { x: 3, y: 1, width: 3, height: 3 })
        );
    }

    #[test]
    fn test_split_into_bands_writes_land_in_the_right_rows() {
        let mut buffer = FrameBuffer::new(2, 3);
        let bands = [RowBand::new(0, 0, 1), RowBand::new(1, 1, 3)];

        {
            let mut slices = buffer.split_into_bands(&bands).unwrap();
            assert_eq!(slices[0].len(), 2);
            assert_eq!(slices[1].len(), 4);

            slices[0].fill(7);
            slices[1].fill(9);
        }

        assert_eq!(buffer.samples(), &[7, 7, 9, 9, 9, 9]);
        assert_eq!(buffer.pixel(1, 2), Ok(9));
    }

    #[test]
    fn test_split_into_bands_allows_empty_bands() {
        let mut buffer = FrameBuffer::new(2, 2);
        let bands = [RowBand::new(0, 0, 0), RowBand::new(1, 0, 2)];
        let slices = buffer.split_into_bands(&bands).unwrap();

        assert!(slices[0].is_empty());
        assert_eq!(slices[1].len(), 4);
    }

    #[test]
    fn test_split_into_bands_rejects_gap() {
        let mut buffer = FrameBuffer::new(2, 4);
        let bands = [RowBand::new(0, 0, 1), RowBand::new(1, 2, 4)];

        assert_eq!(
            buffer.split_into_bands(&bands),
            Err(FrameBufferError::BandsNotContiguous { band: 1, start_row: 2, height: 4 })
        );
    }

    #[test]
    fn test_split_into_bands_rejects_short_cover() {
        let mut buffer = FrameBuffer::new(2, 4);
        let bands = [RowBand::new(0, 0, 3)];

        assert_eq!(
            buffer.split_into_bands(&bands),
            Err(FrameBufferError::BandsNotContiguous { band: 1, start_row: 3, height: 4 })
        );
    }

    #[test]
    fn test_split_into_bands_rejects_overrun() {
        let mut buffer = FrameBuffer::new(2, 2);
        let bands = [RowBand::new(0, 0, 5)];

        assert!(buffer.split_into_bands(&bands).is_err());
    }

    #[test]
    fn test_to_rgb_bytes_unpacks_channels() {
        let mut buffer = FrameBuffer::new(2, 1);
        {
            let mut slices = buffer.split_into_bands(&[RowBand::new(0, 0, 1)]).unwrap();
            slices[0].copy_from_slice(&[0x12_3456, MAX_COLOUR]);
        }

        assert_eq!(buffer.to_rgb_bytes(), vec![0x12, 0x34, 0x56, 0xFF, 0xFF, 0xFF]);
    }
}
