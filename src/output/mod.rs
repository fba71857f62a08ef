//! Terminal output formatting

pub mod display;

pub use display::print_generate_result;
