//! Rounds and the command-driven game session

mod session;
mod state;

pub use session::{
    Command, Definition, DefinitionChange, EMPTY_POOL_STATUS, RenderDelta, Session, StatusLine,
};
pub use state::{
    MAX_ATTEMPTS, RoundState, RoundStatus, SubmitOutcome, SubmitRejection, SubmitStart,
};
