//! Board UI state - tab navigation, dialogs, and the command contract
//!
//! The board owns only presentation state. Game state arrives read-only
//! through [`BoardInput`] each frame; every mutation that affects the
//! simulation leaves through a [`BoardCommand`] for the parent to apply.

use crate::core::config::BoardConfig;
use crate::core::types::{DistrictId, Round, Shift};
use crate::game::actions::{ActionId, DistrictActions, ImplementedAction};
use crate::game::allocation::PoliceAllocation;
use crate::game::log::GameLog;
use crate::game::metrics::GameMetrics;
use crate::game::summary::RoundSummary;
use crate::ui::events::EventFeed;

/// The five board views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Summary,
    Map,
    Actions,
    Performance,
    Log,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Summary, Tab::Map, Tab::Actions, Tab::Performance, Tab::Log];

    /// Sidebar label; the summary slot doubles as the game overview on a
    /// fresh game's first round
    pub fn label(&self, overview: bool) -> &'static str {
        match self {
            Tab::Summary => {
                if overview {
                    "Game Overview"
                } else {
                    "Round Summary"
                }
            }
            Tab::Map => "Districts",
            Tab::Actions => "Actions",
            Tab::Performance => "Data Analytics",
            Tab::Log => "Round History",
        }
    }
}

/// Read-only game state supplied by the parent each frame
#[derive(Debug, Clone, Copy)]
pub struct BoardInput<'a> {
    pub allocation: &'a PoliceAllocation,
    pub metrics: &'a GameMetrics,
    pub district_actions: &'a DistrictActions,
    pub round_summary: Option<&'a RoundSummary>,
    pub game_log: &'a GameLog,
    pub implemented_actions: &'a [ImplementedAction],
    pub current_round: Round,
    pub is_first_play: bool,
    pub show_round_summary: bool,
}

impl BoardInput<'_> {
    /// Whether the summary slot shows the game overview instead of a
    /// round summary
    pub fn overview_mode(&self) -> bool {
        self.current_round == 1 && self.is_first_play
    }
}

/// A mutation the board asks the parent to apply
#[derive(Debug, Clone)]
pub enum BoardCommand {
    SetAllocation(PoliceAllocation),
    SetDistrictAction(DistrictId, ActionId),
    AdvanceRound,
    CloseRoundSummary,
    Restart,
}

/// Selection cursor for keyboard-driven editing on the map and actions
/// views
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    /// Index into [`DistrictId::ALL`]
    pub district: usize,
    pub shift: Shift,
}

impl Cursor {
    pub fn district_id(&self) -> DistrictId {
        DistrictId::ALL[self.district % DistrictId::ALL.len()]
    }
}

/// Local state of the top-level board component
#[derive(Debug)]
pub struct Board {
    pub active_tab: Tab,
    pub show_help: bool,
    pub show_restart_confirm: bool,
    pub show_notifications: bool,
    pub feed: EventFeed,
    pub cursor: Cursor,
    config: BoardConfig,
    /// Round whose summary already forced the tab, so a manual switch
    /// afterwards sticks
    summary_forced_for: Option<Round>,
    last_round: Option<Round>,
}

impl Board {
    pub fn new(config: BoardConfig, input: &BoardInput) -> Self {
        let active_tab = if input.show_round_summary || input.overview_mode() {
            Tab::Summary
        } else {
            Tab::Map
        };
        let feed = EventFeed::new(config.max_events_per_round);
        Self {
            active_tab,
            show_help: false,
            show_restart_confirm: false,
            show_notifications: false,
            feed,
            cursor: Cursor {
                district: 0,
                shift: Shift::Day,
            },
            config,
            summary_forced_for: None,
            last_round: None,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Reconcile local state with freshly supplied inputs
    ///
    /// Call once per frame before rendering. Handles the three
    /// input-driven transitions: fresh-game reset of the event feed, the
    /// summary tab override when a new round summary appears, and feed
    /// ingestion of the summary's special events.
    pub fn sync(&mut self, input: &BoardInput) {
        let fresh_game = (input.current_round == 1
            && input.is_first_play
            && self.last_round != Some(1))
            || self.last_round.is_some_and(|last| input.current_round < last);
        if fresh_game {
            self.feed.reset();
            self.summary_forced_for = None;
        }

        if input.show_round_summary && self.summary_forced_for != Some(input.current_round) {
            self.active_tab = Tab::Summary;
            self.summary_forced_for = Some(input.current_round);
        }

        if let Some(summary) = input.round_summary {
            let added = self.feed.ingest(summary, input.current_round);
            if added > 0 {
                tracing::debug!(round = input.current_round, added, "captured special events");
            }
        }

        self.last_round = Some(input.current_round);
    }

    // === Navigation ===

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Open or close the notification popover; opening marks every
    /// event read
    pub fn toggle_notifications(&mut self) {
        self.show_notifications = !self.show_notifications;
        if self.show_notifications {
            self.feed.open();
        }
    }

    pub fn close_notifications(&mut self) {
        self.show_notifications = false;
    }

    /// Empty the notification feed
    pub fn clear_events(&mut self) {
        self.feed.clear();
    }

    /// Whether a modal surface is capturing input
    pub fn modal_open(&self) -> bool {
        self.show_help || self.show_restart_confirm || self.show_notifications
    }

    // === Cursor movement ===

    pub fn cursor_next_district(&mut self) {
        self.cursor.district = (self.cursor.district + 1) % DistrictId::ALL.len();
    }

    pub fn cursor_prev_district(&mut self) {
        self.cursor.district =
            (self.cursor.district + DistrictId::ALL.len() - 1) % DistrictId::ALL.len();
    }

    pub fn cursor_toggle_shift(&mut self) {
        self.cursor.shift = match self.cursor.shift {
            Shift::Day => Shift::Night,
            Shift::Night => Shift::Day,
        };
    }

    // === Allocation ===

    /// Ask the parent to set one shift to a new value
    ///
    /// Returns None (and changes nothing) if the delta would overdraw
    /// the unallocated pool.
    pub fn adjust_allocation(
        &self,
        input: &BoardInput,
        district: DistrictId,
        shift: Shift,
        value: u32,
    ) -> Option<BoardCommand> {
        let mut next = input.allocation.clone();
        if next.set_shift(district, shift, value) {
            Some(BoardCommand::SetAllocation(next))
        } else {
            None
        }
    }

    /// Adjust the shift under the cursor by a signed step
    pub fn nudge_allocation(&self, input: &BoardInput, delta: i32) -> Option<BoardCommand> {
        let district = self.cursor.district_id();
        let current = input.allocation.shift(district, self.cursor.shift);
        let target = current as i64 + delta as i64;
        if target < 0 {
            return None;
        }
        self.adjust_allocation(input, district, self.cursor.shift, target as u32)
    }

    // === Actions ===

    /// Cycle the intervention selected for the cursor district
    pub fn cycle_action(&self, input: &BoardInput, forward: bool) -> BoardCommand {
        let district = self.cursor.district_id();
        let action = match input.district_actions.selected(district) {
            Some(current) => {
                if forward {
                    current.next()
                } else {
                    current.prev()
                }
            }
            None => ActionId::ALL[0],
        };
        BoardCommand::SetDistrictAction(district, action)
    }

    // === Round flow ===

    /// End the current round: force the summary tab, then ask the parent
    /// to advance
    pub fn end_round(&mut self) -> BoardCommand {
        self.active_tab = Tab::Summary;
        BoardCommand::AdvanceRound
    }

    /// Dismiss the round summary and return to the map while the game is
    /// still in progress
    pub fn continue_to_next_round(&mut self, input: &BoardInput) -> BoardCommand {
        if input.current_round <= self.config.total_rounds {
            self.active_tab = Tab::Map;
        }
        BoardCommand::CloseRoundSummary
    }

    // === Restart flow ===

    pub fn request_restart(&mut self) {
        self.show_restart_confirm = true;
    }

    pub fn cancel_restart(&mut self) {
        self.show_restart_confirm = false;
    }

    /// Confirm the pending restart; only this emits the restart command
    pub fn confirm_restart(&mut self) -> BoardCommand {
        self.show_restart_confirm = false;
        BoardCommand::Restart
    }
}
