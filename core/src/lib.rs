pub mod direction;
pub mod error;
pub mod grid;
pub mod navigator;
pub mod solution;
pub mod tester;

pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
pub use navigator::{Navigator, Sight};
pub use solution::{Part, Solution, SolveError};
pub use tester::{TestFailure, Tester};
