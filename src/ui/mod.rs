//! UI module - board state plus the terminal front end

pub mod display;
pub mod events;
pub mod input;
pub mod state;
pub mod terminal;

pub use events::{Event, EventFeed};
pub use state::{Board, BoardCommand, BoardInput, Tab};
