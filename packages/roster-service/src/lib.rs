pub mod engine;
pub mod loader;

mod error;

pub use engine::{FilterEngine, MatchResult, SearchOutcome, TagHighlight, evaluate};
pub use error::{Error, Result};
pub use loader::{Directory, load};
