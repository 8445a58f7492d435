//! Determinism checks for rendered output.
//!
//! A configuration must produce the same bytes every time it is rendered,
//! whichever thread renders it and however the configuration was built.
//! These helpers run a generator repeatedly and report the first byte that
//! differs.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference.
    pub offset: usize,
    /// Value from the first run (0 past its end).
    pub expected: u8,
    /// Value from the differing run (0 past its end).
    pub actual: u8,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected 0x{:02X}, got 0x{:02X} (run {})",
            self.offset, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run `generate_fn` `runs` times and compare every output to the first.
///
/// # Example
///
/// ```
/// use eventart::{presets, render};
/// use eventart_tests::determinism::verify_determinism;
///
/// let config = presets::ocean(3);
/// let result = verify_determinism(
///     || render::render(&config, 8, 8, [0.0, 0.0]).unwrap().to_rgba8(),
///     3,
/// );
/// assert!(result.is_deterministic);
/// ```
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    let mut diff_info = None;
    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = first_difference(reference, output.as_ref(), run_index) {
            diff_info = Some(diff);
            break;
        }
    }

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference.len(),
        hash,
        diff_info,
    }
}

/// First differing byte between two outputs, including a length mismatch.
pub fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let shared = expected.len().min(actual.len());
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or((expected.len() != actual.len()).then_some(shared))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied().unwrap_or(0),
        actual: actual.get(offset).copied().unwrap_or(0),
        run_index,
    })
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Generate a test that runs an expression three times and compares the bytes.
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $generate:expr) => {
        #[test]
        fn $name() {
            let result = $crate::determinism::verify_determinism(|| $generate, 3);
            result.assert_deterministic();
        }
    };
}
