//! Underlying price model: normal draws and GBM paths.

pub mod normal;
pub mod price_process;

pub use normal::NormalSource;
pub use price_process::{generate_path, sample_terminal, GBMPriceProcess, SamplePath};
