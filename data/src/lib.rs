mod error;
pub use error::DataError;

mod puzzle_data;
pub use puzzle_data::{PuzzleData, Separator};
