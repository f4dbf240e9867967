use crate::core::data::row_band::RowBand;
use std::num::NonZeroUsize;

/// Splits `[0, height)` into `thread_count` contiguous bands of
/// `height / thread_count` rows. The last band takes any remainder rows.
pub fn calculate_row_bands(height: u32, thread_count: NonZeroUsize) -> Vec<RowBand> {
    let total_bands = thread_count.get();
    let band_height = (height as usize / total_bands) as u32;

    (0..total_bands)
        .map(|band_num| {
            let start_row = (band_num as u32).saturating_mul(band_height);

            let end_row = if band_num == total_bands - 1 {
                height
            } else {
                (band_num as u32 + 1).saturating_mul(band_height)
            };

            RowBand::new(band_num, start_row, end_row)
        })
        .collect()
}
