//! CLI command implementations

pub mod fingerprint;
pub mod json_output;
pub mod presets;
pub mod preview;
pub mod refresh;
pub mod sample;
