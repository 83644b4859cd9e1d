//! Domain types for the AMD service.
//!
//! Labels, validated audio references and classifier output.

mod audio_url;
mod label;
mod prediction;

pub use audio_url::*;
pub use label::*;
pub use prediction::*;
