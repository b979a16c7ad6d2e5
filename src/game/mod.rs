//! Parent-owned game state the board reads and displays
//!
//! Everything here belongs to the caller. The board receives these
//! structures read-only each frame and hands mutations back as
//! `BoardCommand`s; it never writes into them directly.

pub mod actions;
pub mod allocation;
pub mod log;
pub mod metrics;
pub mod session;
pub mod summary;

pub use actions::{ActionId, DistrictActions, ImplementedAction};
pub use allocation::PoliceAllocation;
pub use log::{GameLog, LogEntry};
pub use metrics::{DistrictMetrics, GameMetrics};
pub use session::GameSession;
pub use summary::{RoundSummary, SpecialEvent};
