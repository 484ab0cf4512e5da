pub mod instructions;
pub mod puzzle;
pub mod session;
pub mod util;

mod errors;
pub use errors::ProviderError;

pub use puzzle::{PuzzleClient, PuzzleId};
pub use session::Session;
