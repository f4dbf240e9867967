pub mod batch_config;
pub mod batch_job;
pub mod complex;
pub mod frame_buffer;
pub mod frame_format;
pub mod row_band;
pub mod viewport;
