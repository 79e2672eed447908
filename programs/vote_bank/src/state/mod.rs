pub mod events;
pub mod vote_bank;

pub use events::*;
pub use vote_bank::*;
