pub mod init_vote_bank;
pub use init_vote_bank::*;

pub mod give_vote;
pub use give_vote::*;

pub mod close_vote_bank;
pub use close_vote_bank::*;

pub mod reveal_result;
pub use reveal_result::*;
