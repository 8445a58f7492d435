//! EventArt integration test infrastructure
//!
//! This crate holds the cross-module tests of the sampling pipeline:
//!
//! - **Golden values**: exact hash and field outputs any implementation must reproduce
//! - **Determinism**: byte-identical renders across runs, rebuilt configs and threads
//! - **End to end**: configuration to color, presets, render surfaces, seed refresh
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p eventart-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use eventart_tests::determinism::verify_determinism;
//! use eventart_tests::test_determinism;
//!
//! let result = verify_determinism(|| render_bytes(&config), 3);
//! assert!(result.is_deterministic);
//!
//! test_determinism!(aurora_thumbnail, {
//!     render_strided(&presets::aurora(1), 32, 32, [0.0, 0.0], 4).unwrap().to_rgba8()
//! });
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{grid_colors, red_blue, red_blue_config};
