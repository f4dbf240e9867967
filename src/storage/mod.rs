pub mod write_frame;
