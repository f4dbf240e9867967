pub mod compute_row_band;
