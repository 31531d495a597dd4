//! Environmental sensor drivers

pub mod scd41;

pub use scd41::Scd41;
