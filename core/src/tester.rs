//! Check a solving function against known input/answer pairs before
//! trusting it with real puzzle input.

use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Test case {case} failed: expected {expected}, got {actual}")]
pub struct TestFailure {
    /// Zero-based index of the failing case.
    pub case: usize,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone)]
pub struct TestCase<I, O> {
    pub input: I,
    pub expected: O,
}

#[derive(Debug, Clone)]
pub struct Tester<I, O> {
    cases: Vec<TestCase<I, O>>,
}

impl<I, O> Default for Tester<I, O> {
    fn default() -> Self {
        Self { cases: Vec::new() }
    }
}

impl<I, O> Tester<I, O>
where
    O: PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_case(&mut self, input: I, expected: O) {
        self.cases.push(TestCase { input, expected });
    }

    pub fn clear(&mut self) {
        self.cases.clear();
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn cases(&self) -> &[TestCase<I, O>] {
        &self.cases
    }

    /// Run `solve` on every case in order, stopping at the first mismatch.
    ///
    /// Returns the number of cases that passed.
    pub fn run<F>(&self, mut solve: F) -> Result<usize, TestFailure>
    where
        F: FnMut(&I) -> O,
    {
        if self.cases.is_empty() {
            log::warn!("There are no test cases to run");
            return Ok(0);
        }

        for (case, TestCase { input, expected }) in self.cases.iter().enumerate() {
            let actual = solve(input);
            let passed = actual == *expected;
            log::info!(
                "case {}: expected {:?}, actual {:?}, passed {}",
                case,
                expected,
                actual,
                passed
            );
            if !passed {
                return Err(TestFailure {
                    case,
                    expected: format!("{:?}", expected),
                    actual: format!("{:?}", actual),
                });
            }
        }

        Ok(self.cases.len())
    }
}
