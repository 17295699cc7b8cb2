//! Card-data loading and validation for the pack engine.

pub mod load;
pub mod sets;

pub use load::*;
pub use sets::*;
