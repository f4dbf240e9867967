use std::ops::Range;

/// A contiguous run of frame rows owned by one band worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowBand {
    index: usize,
    start_row: u32,
    end_row: u32,
}

impl RowBand {
    #[must_use]
    pub fn new(index: usize, start_row: u32, end_row: u32) -> Self {
        Self {
            index,
            start_row,
            end_row,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    #[must_use]
    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    /// Empty when `start_row >= end_row`.
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }

    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_and_count() {
        let band = RowBand::new(2, 14, 28);

        assert_eq!(band.index(), 2);
        assert_eq!(band.rows(), 14..28);
        assert_eq!(band.row_count(), 14);
    }

    #[test]
    fn test_inverted_band_is_empty() {
        let band = RowBand::new(0, 10, 4);

        assert_eq!(band.rows().count(), 0);
        assert_eq!(band.row_count(), 0);
    }
}
