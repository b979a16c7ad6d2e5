//! Demo session - owns the parent side of the board contract
//!
//! Round resolution here is scripted: metric drifts and special events
//! come from a seeded RNG over a fixed table, so the binary and the
//! integration tests can drive the full board loop. The real
//! crime/trust/budget evolution rules live outside this crate.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::core::config::BoardConfig;
use crate::core::error::Result;
use crate::core::types::{DistrictId, EventSeverity, Round, Shift};
use crate::game::actions::{DistrictActions, ImplementedAction};
use crate::game::allocation::PoliceAllocation;
use crate::game::log::{GameLog, LogEntry};
use crate::game::metrics::{DistrictMetrics, GameMetrics};
use crate::game::summary::{RoundSummary, SpecialEvent};
use crate::ui::state::{BoardCommand, BoardInput};

/// Candidate special events the scripted resolver draws from
const SPECIAL_EVENT_TABLE: &[(&str, &str, EventSeverity)] = &[
    (
        "Community rally",
        "Residents organized a rally in support of neighborhood policing.",
        EventSeverity::Positive,
    ),
    (
        "Neighborhood watch formed",
        "Volunteers launched a new watch group and requested police liaison.",
        EventSeverity::Positive,
    ),
    (
        "Officer-involved incident",
        "An arrest turned confrontational; an internal review has opened.",
        EventSeverity::Negative,
    ),
    (
        "Burglary spike",
        "Break-ins rose sharply overnight in one district.",
        EventSeverity::Negative,
    ),
    (
        "Media scrutiny",
        "A local outlet published an analysis of arrest demographics.",
        EventSeverity::Info,
    ),
    (
        "Council budget review",
        "The city council scheduled a review of the police budget.",
        EventSeverity::Info,
    ),
    (
        "Youth center opening",
        "A new youth center opened with strong turnout.",
        EventSeverity::Positive,
    ),
    (
        "Overtime complaints",
        "The union filed complaints about night-shift overtime.",
        EventSeverity::Negative,
    ),
];

/// Starting per-district figures
fn starting_metrics() -> GameMetrics {
    let mut metrics = GameMetrics {
        budget: 1000,
        districts: Default::default(),
    };
    let baseline = [
        (DistrictId::Downtown, 18.0, 72.0),
        (DistrictId::Westside, 34.0, 55.0),
        (DistrictId::SouthSide, 58.0, 28.0),
        (DistrictId::Eastside, 41.0, 44.0),
    ];
    for (district, crime_rate, trust) in baseline {
        metrics.districts.insert(
            district,
            DistrictMetrics {
                crime_rate,
                trust,
                arrests: 0,
            },
        );
    }
    metrics
}

/// Serializable session state for save/load
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    config: BoardConfig,
    seed: u64,
    round: Round,
    first_play: bool,
    allocation: PoliceAllocation,
    metrics: GameMetrics,
    district_actions: DistrictActions,
    implemented: Vec<ImplementedAction>,
    log: GameLog,
    summary: Option<RoundSummary>,
    show_summary: bool,
}

/// The parent caller: owns all simulation-side state and applies the
/// board's commands
#[derive(Debug)]
pub struct GameSession {
    config: BoardConfig,
    seed: u64,
    rng: ChaCha8Rng,
    allocation: PoliceAllocation,
    metrics: GameMetrics,
    district_actions: DistrictActions,
    implemented: Vec<ImplementedAction>,
    log: GameLog,
    summary: Option<RoundSummary>,
    show_summary: bool,
    round: Round,
    first_play: bool,
}

impl GameSession {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut allocation = PoliceAllocation::new(config.officer_pool);
        // Demo staffing: two officers per shift everywhere, remainder spare
        for district in DistrictId::ALL {
            allocation.set_shift(district, Shift::Day, 2);
            allocation.set_shift(district, Shift::Night, 2);
        }
        Self {
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            allocation,
            metrics: starting_metrics(),
            district_actions: DistrictActions::new(),
            implemented: Vec::new(),
            log: GameLog::new(),
            summary: None,
            show_summary: false,
            round: 1,
            first_play: true,
        }
    }

    /// The read-only view the board consumes each frame
    pub fn board_input(&self) -> BoardInput<'_> {
        BoardInput {
            allocation: &self.allocation,
            metrics: &self.metrics,
            district_actions: &self.district_actions,
            round_summary: self.summary.as_ref(),
            game_log: &self.log,
            implemented_actions: &self.implemented,
            current_round: self.round,
            is_first_play: self.first_play,
            show_round_summary: self.show_summary,
        }
    }

    pub fn current_round(&self) -> Round {
        self.round
    }

    pub fn is_over(&self) -> bool {
        self.round > self.config.total_rounds
    }

    /// Apply one board command
    pub fn apply(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::SetAllocation(allocation) => {
                self.allocation = allocation;
            }
            BoardCommand::SetDistrictAction(district, action) => {
                self.district_actions.select(district, action);
            }
            BoardCommand::AdvanceRound => self.advance_round(),
            BoardCommand::CloseRoundSummary => {
                self.show_summary = false;
            }
            BoardCommand::Restart => self.restart(),
        }
    }

    fn advance_round(&mut self) {
        if self.is_over() {
            return;
        }
        let ending = self.round;
        let mut summary = RoundSummary::new(ending);

        // Implement pending intervention choices
        let mut action_cost = 0;
        let selections: Vec<_> = self.district_actions.iter().collect();
        for (district, action) in selections {
            action_cost += action.cost();
            self.implemented.push(ImplementedAction {
                round: ending,
                district,
                action,
            });
            self.log.push(LogEntry {
                round: ending,
                district: Some(district),
                action: Some(action),
                outcome: format!("{} implemented", action.label()),
            });
            summary
                .changes
                .push(format!("{}: {}", district.display_name(), action.label()));
        }
        self.district_actions.clear();

        // Scripted metric drift
        for district in DistrictId::ALL {
            if let Some(figures) = self.metrics.districts.get_mut(&district) {
                let crime_shift: f32 = self.rng.gen_range(-4.0..4.0);
                let trust_shift: f32 = self.rng.gen_range(-3.0..3.0);
                figures.crime_rate = (figures.crime_rate + crime_shift).clamp(0.0, 100.0);
                figures.trust = (figures.trust + trust_shift).clamp(0.0, 100.0);
                figures.arrests += self.rng.gen_range(0..6);
                if crime_shift.abs() >= 2.0 {
                    summary.changes.push(format!(
                        "{}: crime {} {:.0}%",
                        district.display_name(),
                        if crime_shift < 0.0 { "down to" } else { "up to" },
                        figures.crime_rate,
                    ));
                }
            }
        }

        // Scripted budget movement
        let income: i32 = self.rng.gen_range(120..180);
        summary.budget_change = income - action_cost;
        self.metrics.budget += summary.budget_change;

        // Draw special events; sometimes more than the feed keeps
        let count = self.rng.gen_range(0..=5).min(SPECIAL_EVENT_TABLE.len());
        summary.special_events = SPECIAL_EVENT_TABLE
            .choose_multiple(&mut self.rng, count)
            .map(|(title, message, severity)| SpecialEvent {
                title: (*title).to_string(),
                message: (*message).to_string(),
                severity: *severity,
            })
            .collect();

        self.log.push(LogEntry {
            round: ending,
            district: None,
            action: None,
            outcome: format!("Round {} closed, budget {:+}", ending, summary.budget_change),
        });

        self.round = ending + 1;
        self.summary = Some(summary);
        self.show_summary = true;
        if self.is_over() {
            self.first_play = false;
        }
        tracing::info!(round = self.round, "advanced to next round");
    }

    fn restart(&mut self) {
        tracing::info!("restarting game");
        let config = self.config.clone();
        let seed = self.seed;
        *self = GameSession::new(config, seed);
        // Replays after the first game skip the overview tab
        self.first_play = false;
    }

    // === Snapshots ===

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            seed: self.seed,
            round: self.round,
            first_play: self.first_play,
            allocation: self.allocation.clone(),
            metrics: self.metrics.clone(),
            district_actions: self.district_actions.clone(),
            implemented: self.implemented.clone(),
            log: self.log.clone(),
            summary: self.summary.clone(),
            show_summary: self.show_summary,
        }
    }

    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        // The RNG stream restarts offset by the round so a reloaded
        // session does not replay the exact draws of a fresh one
        let rng = ChaCha8Rng::seed_from_u64(snapshot.seed.wrapping_add(snapshot.round as u64));
        Self {
            config: snapshot.config,
            seed: snapshot.seed,
            rng,
            allocation: snapshot.allocation,
            metrics: snapshot.metrics,
            district_actions: snapshot.district_actions,
            implemented: snapshot.implemented,
            log: snapshot.log,
            summary: snapshot.summary,
            show_summary: snapshot.show_summary,
            round: snapshot.round,
            first_play: snapshot.first_play,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &self.snapshot())?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: SessionSnapshot = serde_json::from_reader(file)?;
        Ok(Self::from_snapshot(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_round_produces_summary() {
        let mut session = GameSession::new(BoardConfig::default(), 42);
        assert!(session.board_input().round_summary.is_none());

        session.apply(BoardCommand::AdvanceRound);

        let input = session.board_input();
        assert_eq!(input.current_round, 2);
        assert!(input.show_round_summary);
        let summary = input.round_summary.expect("summary after advancing");
        assert_eq!(summary.round, 1);
    }

    #[test]
    fn test_actions_implemented_and_cleared() {
        use crate::game::actions::ActionId;

        let mut session = GameSession::new(BoardConfig::default(), 42);
        session.apply(BoardCommand::SetDistrictAction(
            DistrictId::SouthSide,
            ActionId::FootPatrols,
        ));
        let budget_before = session.board_input().metrics.budget;

        session.apply(BoardCommand::AdvanceRound);

        let input = session.board_input();
        assert_eq!(input.implemented_actions.len(), 1);
        assert_eq!(input.implemented_actions[0].round, 1);
        assert!(input.district_actions.is_empty());
        // Income minus the action cost moved the budget by budget_change
        let summary = input.round_summary.unwrap();
        assert_eq!(input.metrics.budget, budget_before + summary.budget_change);
    }

    #[test]
    fn test_restart_resets_round_and_clears_first_play() {
        let mut session = GameSession::new(BoardConfig::default(), 42);
        session.apply(BoardCommand::AdvanceRound);
        session.apply(BoardCommand::AdvanceRound);
        assert_eq!(session.current_round(), 3);

        session.apply(BoardCommand::Restart);

        let input = session.board_input();
        assert_eq!(input.current_round, 1);
        assert!(!input.is_first_play);
        assert!(input.round_summary.is_none());
        assert!(input.game_log.is_empty());
    }

    #[test]
    fn test_same_seed_same_script() {
        let mut a = GameSession::new(BoardConfig::default(), 7);
        let mut b = GameSession::new(BoardConfig::default(), 7);
        a.apply(BoardCommand::AdvanceRound);
        b.apply(BoardCommand::AdvanceRound);

        let sa = a.board_input().round_summary.unwrap().clone();
        let sb = b.board_input().round_summary.unwrap().clone();
        assert_eq!(sa.budget_change, sb.budget_change);
        assert_eq!(sa.special_events.len(), sb.special_events.len());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut session = GameSession::new(BoardConfig::default(), 42);
        session.apply(BoardCommand::AdvanceRound);
        session.apply(BoardCommand::CloseRoundSummary);

        let restored = GameSession::from_snapshot(session.snapshot());
        let a = session.board_input();
        let b = restored.board_input();
        assert_eq!(a.current_round, b.current_round);
        assert_eq!(a.metrics.budget, b.metrics.budget);
        assert_eq!(a.show_round_summary, b.show_round_summary);
        assert_eq!(a.game_log.len(), b.game_log.len());
    }

    #[test]
    fn test_no_advance_past_game_end() {
        let config = BoardConfig {
            total_rounds: 2,
            ..BoardConfig::default()
        };
        let mut session = GameSession::new(config, 42);
        session.apply(BoardCommand::AdvanceRound);
        session.apply(BoardCommand::AdvanceRound);
        assert!(session.is_over());
        assert_eq!(session.current_round(), 3);

        session.apply(BoardCommand::AdvanceRound);
        assert_eq!(session.current_round(), 3);
    }
}
