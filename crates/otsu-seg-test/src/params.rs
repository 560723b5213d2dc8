//! Regression test parameters and operations

use otsu_seg_core::{BinaryMask, LabelMap};
use std::collections::HashMap;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Comparisons never
/// panic; failures are collected and reported by [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "otsu")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "otsu")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, detail: String) -> bool {
        let msg = format!(
            "Failure in {}_reg: index {}: {}",
            self.test_name, self.index, detail
        );
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "value comparison: difference = {} but allowed delta = {}; \
                 expected = {}, actual = {}",
                diff, delta, expected, actual
            ))
        } else {
            true
        }
    }

    /// Compare two array shapes
    pub fn compare_shapes(&mut self, expected: &[usize], actual: &[usize]) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(format!(
                "shape comparison: expected {:?}, actual {:?}",
                expected, actual
            ))
        } else {
            true
        }
    }

    /// Compare two masks for exact equality
    pub fn compare_masks(&mut self, expected: &BinaryMask, actual: &BinaryMask) -> bool {
        self.index += 1;

        if expected.shape() != actual.shape() {
            return self.fail(format!(
                "mask comparison: shape {:?} vs {:?}",
                expected.shape(),
                actual.shape()
            ));
        }
        if let Some(pos) = expected.iter().zip(actual.iter()).position(|(a, b)| a != b) {
            return self.fail(format!("mask comparison: mismatch at flat index {}", pos));
        }

        true
    }

    /// Compare two label maps for exact equality
    pub fn compare_labels(&mut self, expected: &LabelMap, actual: &LabelMap) -> bool {
        self.index += 1;

        if expected.shape() != actual.shape() {
            return self.fail(format!(
                "label comparison: shape {:?} vs {:?}",
                expected.shape(),
                actual.shape()
            ));
        }
        if let Some((pos, (a, b))) = expected
            .iter()
            .zip(actual.iter())
            .enumerate()
            .find(|(_, (a, b))| a != b)
        {
            return self.fail(format!(
                "label comparison: flat index {} has label {} instead of {}",
                pos, b, a
            ));
        }

        true
    }

    /// Compare two label maps up to a renumbering of the labels
    ///
    /// Background must match exactly, and the positive labels of the two
    /// maps must be in one-to-one correspondence.
    pub fn compare_partitions(&mut self, expected: &LabelMap, actual: &LabelMap) -> bool {
        self.index += 1;

        if expected.shape() != actual.shape() {
            return self.fail(format!(
                "partition comparison: shape {:?} vs {:?}",
                expected.shape(),
                actual.shape()
            ));
        }

        let mut forward: HashMap<u32, u32> = HashMap::new();
        let mut backward: HashMap<u32, u32> = HashMap::new();
        for (pos, (a, b)) in expected.iter().zip(actual.iter()).enumerate() {
            if (a == 0) != (b == 0) {
                return self.fail(format!(
                    "partition comparison: background differs at flat index {}",
                    pos
                ));
            }
            if a == 0 {
                continue;
            }
            if *forward.entry(a).or_insert(b) != b || *backward.entry(b).or_insert(a) != a {
                return self.fail(format!(
                    "partition comparison: labels {} and {} are not one-to-one at flat index {}",
                    a, b, pos
                ));
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
