pub mod calculate_row_bands;
pub mod panic_message;
