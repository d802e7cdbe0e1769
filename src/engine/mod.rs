//! Game engine
//!
//! [`GuessEngine`] runs a single game; [`Session`] adds the asynchronous
//! word-loading boundary in front of it.

mod guess_engine;
mod input;
mod session;

pub use guess_engine::{GameState, GameStatus, GuessEngine};
pub use input::{Key, Outcome};
pub use session::{FetchOutcome, FetchTicket, Session, SessionStatus};
