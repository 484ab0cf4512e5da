use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    One,
    Two,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "part 1"),
            Part::Two => write!(f, "part 2"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("{0} is not implemented")]
    NotImplemented(Part),

    #[error("Invalid puzzle input: {0}")]
    InvalidInput(String),
}

/// A puzzle solution. Implement the parts as they are unlocked; the
/// defaults report [`SolveError::NotImplemented`].
pub trait Solution {
    type Input;

    fn part1(&self, _input: &Self::Input) -> Result<i64, SolveError> {
        Err(SolveError::NotImplemented(Part::One))
    }

    fn part2(&self, _input: &Self::Input) -> Result<i64, SolveError> {
        Err(SolveError::NotImplemented(Part::Two))
    }

    fn solve(&self, part: Part, input: &Self::Input) -> Result<i64, SolveError> {
        match part {
            Part::One => self.part1(input),
            Part::Two => self.part2(input),
        }
    }
}
