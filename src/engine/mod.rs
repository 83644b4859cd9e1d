//! Classification engine for the AMD service.

mod classifier;

pub use classifier::*;
