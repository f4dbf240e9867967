pub mod compute_row_band;
pub mod render_frame;
pub mod run_batch;
